use banca_data::models::{accounts::Account, ContactId, Currency};
use convert_case::{Case, Casing};

/// Every screen of the app. Closed set; unknown names resolve to `Home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    // Auth
    Login,
    VerifyIdentity,
    FaceIdSetup,
    ConfirmData,
    CreatePassword,
    VerificationSuccess,

    // Tabs and their detail screens
    Home,
    Operations,
    ForYou,
    ProductDetail,
    Notifications,
    AllTransactions,

    // Transfer
    TransferSelect,
    TransferAmount,
    TransferConfirm,
    TransferSuccess,

    // Exchange
    Exchange,
    ExchangeConfirm,
    ExchangeSuccess,

    // Card payment. `CardPayment` is an alias of the selection screen.
    CardPayment,
    CardPaymentSelect,
    CardPaymentAmount,
    CardPaymentSource,
    CardPaymentConfirm,
    CardPaymentSuccess,

    // Loan
    LoanSimulator,
    LoanReview,
    LoanTerms,
    LoanSuccess,

    // Savings goals
    GoalsList,
    GoalDetail,
    GoalsCreateCategory,
    GoalsCreateDetails,
    GoalsSuccess,

    // Bill payments
    ServicesSelect,
    ServicesDetails,
    ServicesDebt,
    ServicesConfirm,
    ServicesSuccess,

    // QR payments
    QrScan,
    QrAmount,
    QrConfirm,
    QrSuccess,

    // Statements
    StatementSelectProduct,
    StatementSelectPeriod,
    StatementDeliveryMethod,
    StatementSuccess,

    // Profile
    Profile,
    ProfileEdit,
    ProfileSecurity,
    ProfileHelp,
    ProfileCardSettings,
    ProfileLocations,

    // Developer
    Logs,
}

/// A group of screens that share transient widget state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Auth,
    Tabs,
    Transfer,
    Exchange,
    CardPayment,
    Loan,
    Goals,
    Services,
    Qr,
    Statement,
    Profile,
    Dev,
}

impl ScreenId {
    pub const ALL: [ScreenId; 54] = [
        ScreenId::Login,
        ScreenId::VerifyIdentity,
        ScreenId::FaceIdSetup,
        ScreenId::ConfirmData,
        ScreenId::CreatePassword,
        ScreenId::VerificationSuccess,
        ScreenId::Home,
        ScreenId::Operations,
        ScreenId::ForYou,
        ScreenId::ProductDetail,
        ScreenId::Notifications,
        ScreenId::AllTransactions,
        ScreenId::TransferSelect,
        ScreenId::TransferAmount,
        ScreenId::TransferConfirm,
        ScreenId::TransferSuccess,
        ScreenId::Exchange,
        ScreenId::ExchangeConfirm,
        ScreenId::ExchangeSuccess,
        ScreenId::CardPayment,
        ScreenId::CardPaymentSelect,
        ScreenId::CardPaymentAmount,
        ScreenId::CardPaymentSource,
        ScreenId::CardPaymentConfirm,
        ScreenId::CardPaymentSuccess,
        ScreenId::LoanSimulator,
        ScreenId::LoanReview,
        ScreenId::LoanTerms,
        ScreenId::LoanSuccess,
        ScreenId::GoalsList,
        ScreenId::GoalDetail,
        ScreenId::GoalsCreateCategory,
        ScreenId::GoalsCreateDetails,
        ScreenId::GoalsSuccess,
        ScreenId::ServicesSelect,
        ScreenId::ServicesDetails,
        ScreenId::ServicesDebt,
        ScreenId::ServicesConfirm,
        ScreenId::ServicesSuccess,
        ScreenId::QrScan,
        ScreenId::QrAmount,
        ScreenId::QrConfirm,
        ScreenId::QrSuccess,
        ScreenId::StatementSelectProduct,
        ScreenId::StatementSelectPeriod,
        ScreenId::StatementDeliveryMethod,
        ScreenId::StatementSuccess,
        ScreenId::Profile,
        ScreenId::ProfileEdit,
        ScreenId::ProfileSecurity,
        ScreenId::ProfileHelp,
        ScreenId::ProfileCardSettings,
        ScreenId::ProfileLocations,
        ScreenId::Logs,
    ];

    /// The tab screens, in tab bar order
    pub const TABS: [ScreenId; 3] = [ScreenId::Home, ScreenId::Operations, ScreenId::ForYou];

    /// Kebab-case name, e.g. `transfer-amount`
    pub fn name(&self) -> String {
        format!("{:?}", self).to_case(Case::Kebab)
    }

    /// Look a screen up by name, falling back to `Home` for anything unknown
    pub fn resolve(name: &str) -> ScreenId {
        let wanted = name.trim().to_case(Case::Kebab);
        match Self::ALL.iter().find(|id| id.name() == wanted) {
            Some(id) => *id,
            None => {
                tracing::warn!("Unknown screen '{}', falling back to home", name);
                ScreenId::Home
            }
        }
    }

    pub fn flow(&self) -> Flow {
        use ScreenId::*;
        match self {
            Login | VerifyIdentity | FaceIdSetup | ConfirmData | CreatePassword
            | VerificationSuccess => Flow::Auth,
            Home | Operations | ForYou | ProductDetail | Notifications | AllTransactions => {
                Flow::Tabs
            }
            TransferSelect | TransferAmount | TransferConfirm | TransferSuccess => Flow::Transfer,
            Exchange | ExchangeConfirm | ExchangeSuccess => Flow::Exchange,
            CardPayment | CardPaymentSelect | CardPaymentAmount | CardPaymentSource
            | CardPaymentConfirm | CardPaymentSuccess => Flow::CardPayment,
            LoanSimulator | LoanReview | LoanTerms | LoanSuccess => Flow::Loan,
            GoalsList | GoalDetail | GoalsCreateCategory | GoalsCreateDetails | GoalsSuccess => {
                Flow::Goals
            }
            ServicesSelect | ServicesDetails | ServicesDebt | ServicesConfirm
            | ServicesSuccess => Flow::Services,
            QrScan | QrAmount | QrConfirm | QrSuccess => Flow::Qr,
            StatementSelectProduct | StatementSelectPeriod | StatementDeliveryMethod
            | StatementSuccess => Flow::Statement,
            Profile | ProfileEdit | ProfileSecurity | ProfileHelp | ProfileCardSettings
            | ProfileLocations => Flow::Profile,
            Logs => Flow::Dev,
        }
    }

    /// Whether the screen carries the bottom tab bar
    pub fn is_tab(&self) -> bool {
        Self::TABS.contains(self)
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// Values that survive every transition
#[derive(Debug, Clone, PartialEq)]
pub struct FlowParams {
    pub selected_account: Account,
    /// Keypad text of the transfer flow
    pub transfer_amount: String,
    /// Keypad text of the exchange flow, in `exchange_currency`
    pub exchange_amount: String,
    pub exchange_currency: Currency,
    pub transfer_contact: Option<ContactId>,
}

impl FlowParams {
    pub fn new(default_account: Account) -> Self {
        Self {
            selected_account: default_account,
            transfer_amount: "0".to_string(),
            exchange_amount: "0".to_string(),
            exchange_currency: Currency::Pen,
            transfer_contact: None,
        }
    }
}

/// The navigator: the current screen plus the cross-flow parameters.
///
/// Every transition is legal and every setter overwrites unconditionally.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub current: ScreenId,
    pub params: FlowParams,
}

impl NavigationState {
    pub fn new(default_account: Account) -> Self {
        Self {
            current: ScreenId::Login,
            params: FlowParams::new(default_account),
        }
    }

    pub fn transition_to(&mut self, target: ScreenId) {
        tracing::debug!("Transition {} -> {}", self.current, target);
        self.current = target;
    }

    pub fn set_selected_account(&mut self, account: Account) {
        self.params.selected_account = account;
    }

    pub fn set_transfer_amount(&mut self, text: impl Into<String>) {
        self.params.transfer_amount = text.into();
    }

    pub fn set_exchange_amount(&mut self, text: impl Into<String>) {
        self.params.exchange_amount = text.into();
    }

    pub fn set_exchange_currency(&mut self, currency: Currency) {
        self.params.exchange_currency = currency;
    }

    pub fn set_transfer_contact(&mut self, contact: Option<ContactId>) {
        self.params.transfer_contact = contact;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banca_data::Catalog;

    fn navigator() -> NavigationState {
        NavigationState::new(Catalog::builtin().default_account())
    }

    #[test]
    fn test_starts_on_login_with_defaults() {
        let nav = navigator();
        assert_eq!(nav.current, ScreenId::Login);
        assert_eq!(nav.params.selected_account.id, "1");
        assert_eq!(nav.params.transfer_amount, "0");
        assert_eq!(nav.params.exchange_amount, "0");
        assert_eq!(nav.params.exchange_currency, Currency::Pen);
    }

    #[test]
    fn test_transition_to_every_screen() {
        let mut nav = navigator();
        for screen in ScreenId::ALL {
            nav.transition_to(screen);
            assert_eq!(nav.current, screen);
        }
    }

    #[test]
    fn test_transitions_keep_params() {
        let mut nav = navigator();
        nav.set_transfer_amount("100");
        nav.set_exchange_currency(Currency::Usd);
        nav.transition_to(ScreenId::ProfileLocations);
        nav.transition_to(ScreenId::TransferConfirm);
        assert_eq!(nav.params.transfer_amount, "100");
        assert_eq!(nav.params.exchange_currency, Currency::Usd);
    }

    #[test]
    fn test_names_are_kebab_case_and_unique() {
        assert_eq!(ScreenId::TransferAmount.name(), "transfer-amount");
        assert_eq!(ScreenId::FaceIdSetup.name(), "face-id-setup");
        assert_eq!(ScreenId::QrScan.name(), "qr-scan");
        assert_eq!(ScreenId::ForYou.name(), "for-you");

        let mut names: Vec<String> = ScreenId::ALL.iter().map(|s| s.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ScreenId::ALL.len());
    }

    #[test]
    fn test_resolve_round_trips_every_name() {
        for screen in ScreenId::ALL {
            assert_eq!(ScreenId::resolve(&screen.name()), screen);
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_home() {
        assert_eq!(ScreenId::resolve("bogus"), ScreenId::Home);
        assert_eq!(ScreenId::resolve(""), ScreenId::Home);
        assert_eq!(ScreenId::resolve("transfer-nowhere"), ScreenId::Home);
    }

    #[test]
    fn test_flows_and_tabs() {
        assert_eq!(ScreenId::CardPayment.flow(), Flow::CardPayment);
        assert_eq!(ScreenId::CardPayment.flow(), ScreenId::CardPaymentSelect.flow());
        assert_eq!(ScreenId::Logs.flow(), Flow::Dev);
        assert!(ScreenId::Home.is_tab());
        assert!(ScreenId::ForYou.is_tab());
        assert!(!ScreenId::Profile.is_tab());
    }
}
