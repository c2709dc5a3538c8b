use banca_data::models::{Currency, Money};

use crate::events::{Adjuster, AppCommand, Setting};
use crate::state::drafts::{CardToggle, SecurityToggle};
use crate::state::ScreenId;
use crate::ui::utils::fmt_money;
use crate::ui::view::{Action, Marker, Panel, Tone, View, ViewContext};

pub fn menu(ctx: &ViewContext) -> View {
    let profile = &ctx.catalog.profile;
    View::new(ScreenId::Profile, "Mi perfil")
        .back(ScreenId::Home)
        .panel(
            Panel::new(profile.full_name.as_str())
                .row("Correo", profile.email.as_str())
                .toned("Nivel", profile.tier.as_str(), Tone::Accent)
                .row("Puntos", profile.points.to_string()),
        )
        .action(Action::go("Editar perfil", ScreenId::ProfileEdit))
        .action(Action::go("Seguridad", ScreenId::ProfileSecurity))
        .action(Action::go("Configuracion de tarjeta", ScreenId::ProfileCardSettings))
        .action(Action::go("Centro de ayuda", ScreenId::ProfileHelp))
        .action(Action::go("Agencias y cajeros", ScreenId::ProfileLocations))
        .action(Action::go("Cerrar sesion", ScreenId::Login))
}

pub fn edit(ctx: &ViewContext) -> View {
    let profile = &ctx.catalog.profile;
    View::new(ScreenId::ProfileEdit, "Editar perfil")
        .back(ScreenId::Profile)
        .panel(
            Panel::new("Datos personales")
                .row("Nombre", profile.full_name.as_str())
                .row("Correo", profile.email.as_str())
                .row("Celular", profile.phone.as_str()),
        )
        .action(Action::go("Guardar cambios", ScreenId::Profile))
}

pub fn security(ctx: &ViewContext) -> View {
    let settings = &ctx.drafts.security;
    let toggles = [
        (SecurityToggle::Biometrics, "Ingreso con biometria"),
        (SecurityToggle::Alerts, "Alertas de operaciones"),
        (SecurityToggle::TemporaryBlock, "Bloqueo temporal de tarjetas"),
        (SecurityToggle::UseAbroad, "Uso en el extranjero"),
    ]
    .map(|(toggle, label)| {
        Action::new(label, AppCommand::Toggle(Setting::Security(toggle)))
            .marker(Marker::Switch(settings.get(toggle)))
    });

    View::new(ScreenId::ProfileSecurity, "Seguridad")
        .back(ScreenId::Profile)
        .panel(
            Panel::new("Tu seguridad")
                .note("Gestiona la seguridad de tu cuenta y tarjetas"),
        )
        .actions(toggles)
}

pub fn card_settings(ctx: &ViewContext) -> View {
    let settings = &ctx.drafts.card_settings;
    let mut card = Panel::new("Tarjeta");
    if let Some(account) = ctx.catalog.credit_cards().next() {
        card = Panel::new(account.name.as_str())
            .row("Numero", account.number.as_str())
            .row("Titular", ctx.catalog.profile.short_name.as_str());
    }

    let toggles = [
        (CardToggle::OnlinePurchases, "Compras por internet"),
        (CardToggle::UseAbroad, "Compras en el extranjero"),
        (CardToggle::AtmWithdrawals, "Retiros en cajeros"),
    ]
    .map(|(toggle, label)| {
        Action::new(label, AppCommand::Toggle(Setting::Card(toggle)))
            .marker(Marker::Switch(settings.get(toggle)))
    });

    View::new(ScreenId::ProfileCardSettings, "Configuracion de tarjeta")
        .back(ScreenId::Profile)
        .panel(card)
        .actions(toggles)
        .action(
            Action::adjuster("Limite diario", Adjuster::CardDailyLimit)
                .detail(fmt_money(Money::from_units(settings.daily_limit), Currency::Pen)),
        )
        .action(Action::go("Guardar", ScreenId::Profile))
}

pub fn help(_ctx: &ViewContext) -> View {
    View::new(ScreenId::ProfileHelp, "Centro de ayuda")
        .back(ScreenId::Profile)
        .panel(
            Panel::new("Preguntas frecuentes")
                .text("Como bloqueo mi tarjeta?")
                .note("Desde Seguridad activa el bloqueo temporal")
                .text("Cuanto demora una transferencia?")
                .note("Entre cuentas propias es inmediata")
                .text("Como cambio mi clave digital?")
                .note("Cierra sesion y elige Olvide mi clave"),
        )
        .panel(
            Panel::new("Contactanos")
                .row("Banca telefonica", "(01) 311-9898")
                .row("Horario", "24 horas"),
        )
}

pub fn locations(ctx: &ViewContext) -> View {
    let mut view =
        View::new(ScreenId::ProfileLocations, "Agencias y cajeros").back(ScreenId::Profile);
    for branch in &ctx.catalog.branches {
        let (status, tone) = if branch.open {
            ("Abierto", Tone::Positive)
        } else {
            ("Cerrado", Tone::Negative)
        };
        view = view.panel(
            Panel::new(format!("{} ({})", branch.name, branch.kind.label()))
                .row(branch.address.as_str(), branch.distance.as_str())
                .toned(status, branch.note.as_str(), tone),
        );
    }
    view
}
