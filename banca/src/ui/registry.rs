//! Screen registry: the single place that maps a [`ScreenId`] to the
//! builder producing its [`View`].

use crate::state::ScreenId;
use crate::ui::screens::*;
use crate::ui::view::{View, ViewContext};

pub type ScreenBuilder = fn(&ViewContext) -> View;

/// Builder for a screen. Exhaustive: adding a screen without a builder
/// does not compile.
pub fn builder(screen: ScreenId) -> ScreenBuilder {
    use ScreenId::*;
    match screen {
        Login => auth::login,
        VerifyIdentity => auth::verify_identity,
        FaceIdSetup => auth::face_id_setup,
        ConfirmData => auth::confirm_data,
        CreatePassword => auth::create_password,
        VerificationSuccess => auth::verification_success,

        Home => tabs::home,
        Operations => tabs::operations,
        ForYou => tabs::for_you,
        ProductDetail => product::product_detail,
        Notifications => product::notifications,
        AllTransactions => product::all_transactions,

        TransferSelect => transfer::select,
        TransferAmount => transfer::amount,
        TransferConfirm => transfer::confirm,
        TransferSuccess => transfer::success,

        Exchange => exchange::exchange,
        ExchangeConfirm => exchange::confirm,
        ExchangeSuccess => exchange::success,

        CardPayment | CardPaymentSelect => card_payment::select,
        CardPaymentAmount => card_payment::amount,
        CardPaymentSource => card_payment::source,
        CardPaymentConfirm => card_payment::confirm,
        CardPaymentSuccess => card_payment::success,

        LoanSimulator => loan::simulator,
        LoanReview => loan::review,
        LoanTerms => loan::terms,
        LoanSuccess => loan::success,

        GoalsList => goals::list,
        GoalDetail => goals::detail,
        GoalsCreateCategory => goals::create_category,
        GoalsCreateDetails => goals::create_details,
        GoalsSuccess => goals::success,

        ServicesSelect => services::select,
        ServicesDetails => services::details,
        ServicesDebt => services::debt,
        ServicesConfirm => services::confirm,
        ServicesSuccess => services::success,

        QrScan => qr::scan,
        QrAmount => qr::amount,
        QrConfirm => qr::confirm,
        QrSuccess => qr::success,

        StatementSelectProduct => statement::select_product,
        StatementSelectPeriod => statement::select_period,
        StatementDeliveryMethod => statement::delivery_method,
        StatementSuccess => statement::success,

        Profile => profile::menu,
        ProfileEdit => profile::edit,
        ProfileSecurity => profile::security,
        ProfileHelp => profile::help,
        ProfileCardSettings => profile::card_settings,
        ProfileLocations => profile::locations,

        Logs => logs_screen::view,
    }
}

/// View of the current screen
pub fn build(ctx: &ViewContext) -> View {
    builder(ctx.nav.current)(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::AppCommand;
    use crate::state::AppState;
    use banca_data::Catalog;

    #[test]
    fn test_every_screen_builds_its_own_view() {
        let mut state = AppState::new(Catalog::builtin());
        for screen in ScreenId::ALL {
            state.navigate(screen);
            let view = build(&state.view_context());
            assert_eq!(view.screen, screen, "builder mismatch for {}", screen);
            assert!(!view.title.is_empty(), "untitled screen {}", screen);
            assert_ne!(view.back, Some(screen), "{} goes back to itself", screen);
        }
    }

    #[test]
    fn test_card_payment_alias_shares_selection_view() {
        let mut state = AppState::new(Catalog::builtin());
        state.navigate(ScreenId::CardPayment);
        let alias = build(&state.view_context());
        state.navigate(ScreenId::CardPaymentSelect);
        let select = build(&state.view_context());
        assert_eq!(alias.actions, select.actions);
    }

    #[test]
    fn test_login_leads_to_home() {
        let state = AppState::new(Catalog::builtin());
        let view = build(&state.view_context());
        assert_eq!(view.screen, ScreenId::Login);
        assert!(
            view.actions
                .iter()
                .any(|a| a.command == AppCommand::Navigate(ScreenId::Home))
        );
    }
}
