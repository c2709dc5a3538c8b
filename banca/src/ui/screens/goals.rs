use banca_data::models::{
    goals::{GoalCategory, SavingsGoal},
    Currency, Money,
};

use crate::events::{Adjuster, AppCommand, InputField};
use crate::state::ScreenId;
use crate::ui::utils::{fmt_keypad, fmt_money, progress_bar};
use crate::ui::view::{Action, Marker, Panel, Tone, View, ViewContext};
use crate::utils::{keypad, savings};

const NAME_ROW: usize = 0;
const TARGET_ROW: usize = 1;

fn selected_goal<'a>(ctx: &ViewContext<'a>) -> Option<&'a SavingsGoal> {
    let goals = &ctx.catalog.goals;
    ctx.drafts
        .goal
        .selected
        .as_ref()
        .and_then(|id| goals.iter().find(|g| &g.id == id))
        .or_else(|| goals.first())
}

pub fn list(ctx: &ViewContext) -> View {
    let goals = &ctx.catalog.goals;

    let mut totals = Panel::new("Total ahorrado");
    for currency in [Currency::Pen, Currency::Usd] {
        let saved: Money = goals
            .iter()
            .filter(|g| g.currency == currency)
            .map(|g| g.current)
            .sum();
        if !saved.is_zero() {
            totals = totals.toned(currency.code(), fmt_money(saved, currency), Tone::Accent);
        }
    }

    let actions = goals.iter().map(|goal| {
        Action::new(goal.title.as_str(), AppCommand::OpenGoal(goal.id.clone())).detail(format!(
            "{} de {} ({}%)",
            fmt_money(goal.current, goal.currency),
            fmt_money(goal.target, goal.currency),
            goal.progress_percent()
        ))
    });

    View::new(ScreenId::GoalsList, "Mis metas")
        .back(ScreenId::Operations)
        .panel(totals)
        .actions(actions)
        .action(Action::go("Crear nueva meta", ScreenId::GoalsCreateCategory))
}

pub fn detail(ctx: &ViewContext) -> View {
    let contribution = ctx.drafts.goal.contribution;
    let view = View::new(ScreenId::GoalDetail, "Detalle de meta").back(ScreenId::GoalsList);

    let Some(goal) = selected_goal(ctx) else {
        return view.panel(Panel::new("Metas").note("Aun no tienes metas"));
    };

    let months = savings::months_to_target(goal.current, goal.target, contribution);
    let estimate = if months == 0 {
        "Meta alcanzada".to_string()
    } else {
        format!("Lograras tu meta en {} meses", months)
    };

    view.panel(
        Panel::new(goal.title.as_str())
            .note(goal.category.as_str())
            .text(format!(
                "{} {}%",
                progress_bar(goal.progress_percent(), 20),
                goal.progress_percent()
            ))
            .row("Ahorrado", fmt_money(goal.current, goal.currency))
            .row("Meta", fmt_money(goal.target, goal.currency))
            .row("Falta", fmt_money(goal.target - goal.current, goal.currency)),
    )
    .panel(Panel::new("Tiempo estimado").toned(estimate, "", Tone::Accent))
    .action(
        Action::adjuster("Aporte mensual", Adjuster::GoalContribution)
            .detail(fmt_money(Money::from_units(contribution), goal.currency)),
    )
    .action(Action::go("Guardar cambios", ScreenId::GoalsList))
}

pub fn create_category(ctx: &ViewContext) -> View {
    let chosen = ctx.drafts.goal.category;
    let categories = GoalCategory::ALL.into_iter().map(|category| {
        Action::new(category.label(), AppCommand::ChooseGoalCategory(category))
            .marker(Marker::Radio(category == chosen))
    });

    View::new(ScreenId::GoalsCreateCategory, "Que quieres lograr?")
        .back(ScreenId::GoalsList)
        .panel(Panel::new("Paso 1 de 2").note("Elige la categoria de tu objetivo"))
        .actions(categories)
}

/// The typed field follows the highlighted row: name first, then target
pub fn create_details(ctx: &ViewContext) -> View {
    let draft = &ctx.drafts.goal;
    let name = if draft.name.is_empty() {
        "Ej. Ahorro para auto".to_string()
    } else {
        draft.name.clone()
    };

    let view = View::new(ScreenId::GoalsCreateDetails, "Personaliza tu meta")
        .back(ScreenId::GoalsCreateCategory)
        .panel(
            Panel::new("Paso 2 de 2")
                .row("Categoria", draft.category.label())
                .note("Escribe el nombre y el monto objetivo"),
        )
        .action(Action::new("Nombre de la meta", AppCommand::SelectNext).detail(name))
        .action(
            Action::new("Monto objetivo", AppCommand::SelectNext)
                .detail(fmt_keypad(&draft.target, Currency::Pen)),
        )
        .action(Action::go("Crear meta", ScreenId::GoalsSuccess));

    match ctx.selection {
        NAME_ROW => view.input(InputField::GoalName),
        TARGET_ROW => view.input(InputField::GoalTarget),
        _ => view,
    }
}

pub fn success(ctx: &ViewContext) -> View {
    let draft = &ctx.drafts.goal;
    let name = if draft.name.trim().is_empty() {
        draft.category.label().to_string()
    } else {
        draft.name.trim().to_string()
    };

    View::new(ScreenId::GoalsSuccess, "Meta creada")
        .panel(
            Panel::new(name)
                .row("Categoria", draft.category.label())
                .toned(
                    "Objetivo",
                    fmt_money(keypad::parse_amount(&draft.target), Currency::Pen),
                    Tone::Positive,
                ),
        )
        .action(Action::go("Ver mis metas", ScreenId::GoalsList))
        .action(Action::go("Ir al inicio", ScreenId::Home))
}
