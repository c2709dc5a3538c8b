//! Screen-local widget state, one draft per flow.
//!
//! Drafts are reset when a transition enters their flow from another flow.

use banca_data::models::{
    accounts::Account, goals::GoalCategory, payments::Biller, AccountId, BillerId, Currency,
    GoalId, MerchantId, Money,
};
use banca_data::Catalog;

use super::navigation::Flow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentOption {
    #[default]
    Month,
    Minimum,
    Total,
    Other,
}

impl PaymentOption {
    pub const ALL: [PaymentOption; 4] = [
        PaymentOption::Month,
        PaymentOption::Minimum,
        PaymentOption::Total,
        PaymentOption::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentOption::Month => "Pago del mes",
            PaymentOption::Minimum => "Pago minimo",
            PaymentOption::Total => "Deuda total",
            PaymentOption::Other => "Otro monto",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardPaymentDraft {
    pub card: Option<AccountId>,
    pub option: PaymentOption,
    pub other_amount: String,
    pub source: Option<AccountId>,
}

impl CardPaymentDraft {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            card: catalog.credit_cards().next().map(|a| a.id.clone()),
            option: PaymentOption::default(),
            other_amount: "0".to_string(),
            source: catalog.deposit_accounts().next().map(|a| a.id.clone()),
        }
    }

    /// Amount to pay for the chosen option of `card`
    pub fn amount(&self, card: &Account) -> Money {
        let Some(line) = card.credit_line.as_ref() else {
            return crate::utils::keypad::parse_amount(&self.other_amount);
        };
        match self.option {
            PaymentOption::Month => line.monthly_payment,
            PaymentOption::Minimum => line.minimum_payment,
            PaymentOption::Total => line.total_debt,
            PaymentOption::Other => crate::utils::keypad::parse_amount(&self.other_amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoanDraft {
    /// Principal in whole units
    pub amount: i64,
    pub months: u32,
    pub currency: Currency,
    pub payout: Option<AccountId>,
    pub terms_accepted: bool,
}

impl LoanDraft {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            amount: catalog.loan_offer.default_amount,
            months: catalog.loan_offer.default_months,
            currency: Currency::Pen,
            payout: catalog.deposit_accounts().next().map(|a| a.id.clone()),
            terms_accepted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalDraft {
    pub selected: Option<GoalId>,
    /// Monthly contribution in whole units
    pub contribution: i64,
    pub category: GoalCategory,
    pub name: String,
    pub target: String,
}

impl Default for GoalDraft {
    fn default() -> Self {
        Self {
            selected: None,
            contribution: 100,
            category: GoalCategory::default(),
            name: String::new(),
            target: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServicesDraft {
    pub biller: Option<BillerId>,
    pub supply: String,
    /// One flag per pending bill of `biller`
    pub selected_bills: Vec<bool>,
}

impl ServicesDraft {
    /// Pick a biller, preselecting overdue bills and the next one due
    pub fn choose_biller(&mut self, biller: &Biller) {
        let next_due = biller.bills.iter().position(|b| !b.overdue);
        self.biller = Some(biller.id.clone());
        self.selected_bills = biller
            .bills
            .iter()
            .enumerate()
            .map(|(i, bill)| bill.overdue || Some(i) == next_due)
            .collect();
    }

    pub fn toggle_bill(&mut self, index: usize) {
        if let Some(flag) = self.selected_bills.get_mut(index) {
            *flag = !*flag;
        }
    }

    /// Select every bill, or clear them all when all are already selected
    pub fn toggle_all(&mut self) {
        let all = self.selected_bills.iter().all(|s| *s);
        self.selected_bills.iter_mut().for_each(|s| *s = !all);
    }

    pub fn any_selected(&self) -> bool {
        self.selected_bills.iter().any(|s| *s)
    }

    pub fn total(&self, biller: &Biller) -> Money {
        biller
            .bills
            .iter()
            .zip(&self.selected_bills)
            .filter(|(_, selected)| **selected)
            .map(|(bill, _)| bill.amount)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QrDraft {
    pub merchant: Option<MerchantId>,
    pub amount: String,
}

impl Default for QrDraft {
    fn default() -> Self {
        Self {
            merchant: None,
            amount: "25.50".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementPeriod {
    #[default]
    Current,
    Previous,
    BeforePrevious,
    Custom,
}

impl StatementPeriod {
    pub const ALL: [StatementPeriod; 4] = [
        StatementPeriod::Current,
        StatementPeriod::Previous,
        StatementPeriod::BeforePrevious,
        StatementPeriod::Custom,
    ];

    /// How many months back from the catalog date, None for a custom range
    pub fn months_back(&self) -> Option<u32> {
        match self {
            StatementPeriod::Current => Some(0),
            StatementPeriod::Previous => Some(1),
            StatementPeriod::BeforePrevious => Some(2),
            StatementPeriod::Custom => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMethod {
    #[default]
    Email,
    Download,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatementDraft {
    pub product: Option<AccountId>,
    pub period: StatementPeriod,
    pub method: DeliveryMethod,
}

impl StatementDraft {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            product: catalog.accounts.first().map(|a| a.id.clone()),
            period: StatementPeriod::default(),
            method: DeliveryMethod::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityToggle {
    Biometrics,
    Alerts,
    TemporaryBlock,
    UseAbroad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecuritySettings {
    pub biometrics: bool,
    pub alerts: bool,
    pub temporary_block: bool,
    pub use_abroad: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            biometrics: true,
            alerts: true,
            temporary_block: false,
            use_abroad: false,
        }
    }
}

impl SecuritySettings {
    pub fn get(&self, toggle: SecurityToggle) -> bool {
        match toggle {
            SecurityToggle::Biometrics => self.biometrics,
            SecurityToggle::Alerts => self.alerts,
            SecurityToggle::TemporaryBlock => self.temporary_block,
            SecurityToggle::UseAbroad => self.use_abroad,
        }
    }

    pub fn toggle(&mut self, toggle: SecurityToggle) {
        let flag = match toggle {
            SecurityToggle::Biometrics => &mut self.biometrics,
            SecurityToggle::Alerts => &mut self.alerts,
            SecurityToggle::TemporaryBlock => &mut self.temporary_block,
            SecurityToggle::UseAbroad => &mut self.use_abroad,
        };
        *flag = !*flag;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardToggle {
    OnlinePurchases,
    UseAbroad,
    AtmWithdrawals,
}

pub const CARD_LIMIT_MAX: i64 = 10_000;
pub const CARD_LIMIT_STEP: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSettings {
    pub online_purchases: bool,
    pub use_abroad: bool,
    pub atm_withdrawals: bool,
    /// Daily spending limit in whole units
    pub daily_limit: i64,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            online_purchases: true,
            use_abroad: false,
            atm_withdrawals: true,
            daily_limit: 2_500,
        }
    }
}

impl CardSettings {
    pub fn get(&self, toggle: CardToggle) -> bool {
        match toggle {
            CardToggle::OnlinePurchases => self.online_purchases,
            CardToggle::UseAbroad => self.use_abroad,
            CardToggle::AtmWithdrawals => self.atm_withdrawals,
        }
    }

    pub fn toggle(&mut self, toggle: CardToggle) {
        let flag = match toggle {
            CardToggle::OnlinePurchases => &mut self.online_purchases,
            CardToggle::UseAbroad => &mut self.use_abroad,
            CardToggle::AtmWithdrawals => &mut self.atm_withdrawals,
        };
        *flag = !*flag;
    }

    pub fn adjust_limit(&mut self, up: bool) {
        let next = if up {
            self.daily_limit + CARD_LIMIT_STEP
        } else {
            self.daily_limit - CARD_LIMIT_STEP
        };
        self.daily_limit = next.clamp(0, CARD_LIMIT_MAX);
    }
}

/// All per-flow drafts
#[derive(Debug, Clone, PartialEq)]
pub struct Drafts {
    pub card_payment: CardPaymentDraft,
    pub loan: LoanDraft,
    pub goal: GoalDraft,
    pub services: ServicesDraft,
    pub qr: QrDraft,
    pub statement: StatementDraft,
    pub security: SecuritySettings,
    pub card_settings: CardSettings,
}

impl Drafts {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            card_payment: CardPaymentDraft::new(catalog),
            loan: LoanDraft::new(catalog),
            goal: GoalDraft::default(),
            services: ServicesDraft::default(),
            qr: QrDraft::default(),
            statement: StatementDraft::new(catalog),
            security: SecuritySettings::default(),
            card_settings: CardSettings::default(),
        }
    }

    /// Restore the defaults of the drafts owned by `flow`
    pub fn reset(&mut self, flow: Flow, catalog: &Catalog) {
        match flow {
            Flow::CardPayment => self.card_payment = CardPaymentDraft::new(catalog),
            Flow::Loan => self.loan = LoanDraft::new(catalog),
            Flow::Goals => self.goal = GoalDraft::default(),
            Flow::Services => self.services = ServicesDraft::default(),
            Flow::Qr => self.qr = QrDraft::default(),
            Flow::Statement => self.statement = StatementDraft::new(catalog),
            Flow::Profile => {
                self.security = SecuritySettings::default();
                self.card_settings = CardSettings::default();
            }
            Flow::Auth | Flow::Tabs | Flow::Transfer | Flow::Exchange | Flow::Dev => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_payment_defaults_to_first_card_and_deposit() {
        let catalog = Catalog::builtin();
        let draft = CardPaymentDraft::new(&catalog);
        assert_eq!(draft.card.as_ref().map(|id| id.as_str()), Some("4"));
        assert_eq!(draft.source.as_ref().map(|id| id.as_str()), Some("1"));
    }

    #[test]
    fn test_card_payment_amount_per_option() {
        let catalog = Catalog::builtin();
        let card = catalog.account(&"4".into()).unwrap();
        let mut draft = CardPaymentDraft::new(&catalog);

        assert_eq!(draft.amount(card), Money::from_cents(45_000));
        draft.option = PaymentOption::Minimum;
        assert_eq!(draft.amount(card), Money::from_cents(8_500));
        draft.option = PaymentOption::Total;
        assert_eq!(draft.amount(card), Money::from_cents(124_000));
        draft.option = PaymentOption::Other;
        draft.other_amount = "300.5".to_string();
        assert_eq!(draft.amount(card), Money::from_cents(30_050));
    }

    #[test]
    fn test_services_preselects_overdue_and_next_bill() {
        let catalog = Catalog::builtin();
        let biller = catalog.biller(&"b2".into()).unwrap();
        let mut draft = ServicesDraft::default();
        draft.choose_biller(biller);

        assert_eq!(draft.selected_bills, vec![true, true, false]);
        assert_eq!(draft.total(biller), Money::from_cents(27_750));
    }

    #[test]
    fn test_services_toggles() {
        let catalog = Catalog::builtin();
        let biller = catalog.biller(&"b2".into()).unwrap();
        let mut draft = ServicesDraft::default();
        draft.choose_biller(biller);

        draft.toggle_bill(2);
        assert_eq!(draft.total(biller), Money::from_cents(39_750));
        draft.toggle_all();
        assert!(!draft.any_selected());
        draft.toggle_all();
        assert_eq!(draft.selected_bills, vec![true, true, true]);
        draft.toggle_bill(99);
        assert_eq!(draft.selected_bills.len(), 3);
    }

    #[test]
    fn test_card_limit_stays_in_range() {
        let mut settings = CardSettings::default();
        settings.adjust_limit(true);
        assert_eq!(settings.daily_limit, 2_600);

        settings.daily_limit = 0;
        settings.adjust_limit(false);
        assert_eq!(settings.daily_limit, 0);

        settings.daily_limit = CARD_LIMIT_MAX;
        settings.adjust_limit(true);
        assert_eq!(settings.daily_limit, CARD_LIMIT_MAX);
    }

    #[test]
    fn test_reset_only_touches_entered_flow() {
        let catalog = Catalog::builtin();
        let mut drafts = Drafts::new(&catalog);
        drafts.loan.terms_accepted = true;
        drafts.qr.amount = "9".to_string();

        drafts.reset(Flow::Loan, &catalog);
        assert!(!drafts.loan.terms_accepted);
        assert_eq!(drafts.qr.amount, "9");

        drafts.security.toggle(SecurityToggle::Biometrics);
        drafts.reset(Flow::Profile, &catalog);
        assert!(drafts.security.biometrics);
    }
}
