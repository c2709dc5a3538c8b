use crate::state::ScreenId;
use crate::ui::view::{Action, Panel, View, ViewContext};

pub fn login(ctx: &ViewContext) -> View {
    let profile = &ctx.catalog.profile;
    View::new(ScreenId::Login, "Banca Movil")
        .panel(
            Panel::new("Bienvenido")
                .text(format!("Hola, {}", profile.short_name))
                .note("Ingresa con tu clave digital o tu huella"),
        )
        .action(Action::go("Ingresar", ScreenId::Home))
        .action(Action::go("Registrarme", ScreenId::VerifyIdentity))
}

pub fn verify_identity(_ctx: &ViewContext) -> View {
    View::new(ScreenId::VerifyIdentity, "Verifica tu identidad")
        .back(ScreenId::Login)
        .panel(
            Panel::new("Paso 1 de 4")
                .text("Ten a la mano tu DNI")
                .note("Validaremos tu documento contra RENIEC"),
        )
        .action(Action::go("Continuar", ScreenId::FaceIdSetup))
}

pub fn face_id_setup(_ctx: &ViewContext) -> View {
    View::new(ScreenId::FaceIdSetup, "Configura tu Face ID")
        .back(ScreenId::VerifyIdentity)
        .panel(
            Panel::new("Paso 2 de 4")
                .text("Ubica tu rostro dentro del marco")
                .note("Usaremos tu rostro para autorizar operaciones"),
        )
        .action(Action::go("Activar Face ID", ScreenId::ConfirmData))
        .action(Action::go("Omitir por ahora", ScreenId::ConfirmData))
}

pub fn confirm_data(ctx: &ViewContext) -> View {
    let profile = &ctx.catalog.profile;
    View::new(ScreenId::ConfirmData, "Confirma tus datos")
        .back(ScreenId::FaceIdSetup)
        .panel(
            Panel::new("Paso 3 de 4")
                .row("Nombre", profile.full_name.as_str())
                .row("Correo", profile.email.as_str())
                .row("Celular", profile.phone.as_str()),
        )
        .action(Action::go("Mis datos son correctos", ScreenId::CreatePassword))
}

pub fn create_password(_ctx: &ViewContext) -> View {
    View::new(ScreenId::CreatePassword, "Crea tu clave digital")
        .back(ScreenId::ConfirmData)
        .panel(
            Panel::new("Paso 4 de 4")
                .text("Tu clave debe tener 6 digitos")
                .note("No uses fechas ni numeros consecutivos"),
        )
        .action(Action::go("Crear clave", ScreenId::VerificationSuccess))
}

pub fn verification_success(ctx: &ViewContext) -> View {
    View::new(ScreenId::VerificationSuccess, "Registro exitoso")
        .panel(
            Panel::new("Listo")
                .text(format!("{}, ya puedes usar tu banca movil", ctx.catalog.profile.short_name)),
        )
        .action(Action::go("Ir al inicio", ScreenId::Home))
}
