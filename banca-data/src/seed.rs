use crate::Catalog;
use crate::models::{
    Currency, Money,
    accounts::{Account, AccountType, CreditLine},
    feed::{Notification, Offer},
    goals::SavingsGoal,
    payments::{Bill, Biller, Merchant},
    people::{Contact, UserProfile},
    places::{Branch, BranchKind},
    pricing::{ExchangeRates, LoanOffer},
    transactions::{Transaction, TransactionKind},
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn account(
    id: &str,
    name: &str,
    number: &str,
    cents: i64,
    currency: Currency,
    account_type: AccountType,
) -> Account {
    Account {
        id: id.into(),
        name: name.to_string(),
        number: number.to_string(),
        balance: Money::from_cents(cents),
        currency,
        account_type,
        credit_line: None,
    }
}

fn contact(id: &str, name: &str, bank: &str, number: &str, favorite: bool) -> Contact {
    Contact {
        id: id.into(),
        name: name.to_string(),
        bank: bank.to_string(),
        account: number.to_string(),
        favorite,
    }
}

fn transaction(
    id: &str,
    title: &str,
    category: &str,
    date: NaiveDate,
    cents: i64,
    currency: Currency,
    kind: TransactionKind,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        date,
        amount: Money::from_cents(cents),
        currency,
        kind,
    }
}

fn goal(id: &str, title: &str, category: &str, current: i64, target: i64, currency: Currency) -> SavingsGoal {
    SavingsGoal {
        id: id.into(),
        title: title.to_string(),
        category: category.to_string(),
        current: Money::from_units(current),
        target: Money::from_units(target),
        currency,
        monthly_contribution: 100,
    }
}

fn bill(period: &str, due: &str, cents: i64, overdue: bool) -> Bill {
    Bill {
        period: period.to_string(),
        due: due.to_string(),
        amount: Money::from_cents(cents),
        overdue,
    }
}

fn biller(id: &str, name: &str, detail: &str, category: &str, bills: Vec<Bill>) -> Biller {
    Biller {
        id: id.into(),
        name: name.to_string(),
        detail: detail.to_string(),
        category: category.to_string(),
        favorite: true,
        bills,
    }
}

fn branch(name: &str, kind: BranchKind, address: &str, distance: &str, open: bool, note: &str) -> Branch {
    Branch {
        name: name.to_string(),
        kind,
        address: address.to_string(),
        distance: distance.to_string(),
        open,
        note: note.to_string(),
    }
}

fn notification(title: &str, body: &str, time: &str, today: bool, unread: bool) -> Notification {
    Notification {
        title: title.to_string(),
        body: body.to_string(),
        time: time.to_string(),
        today,
        unread,
    }
}

fn offer(title: &str, detail: &str, badge: &str) -> Offer {
    Offer {
        title: title.to_string(),
        detail: detail.to_string(),
        badge: badge.to_string(),
    }
}

pub(crate) fn builtin() -> Catalog {
    use Currency::{Pen, Usd};
    use TransactionKind::{Expense, Income};

    let mut visa = account(
        "4",
        "Visa Signature",
        "**** **** **** 4582",
        876_000,
        Pen,
        AccountType::CreditCard,
    );
    visa.credit_line = Some(CreditLine {
        brand: "VISA".to_string(),
        monthly_payment: Money::from_cents(45_000),
        minimum_payment: Money::from_cents(8_500),
        total_debt: Money::from_cents(124_000),
    });

    let as_of = date(2024, 5, 24);

    Catalog {
        as_of,
        profile: UserProfile {
            full_name: "Alejandro García".to_string(),
            short_name: "Alejandro G.".to_string(),
            email: "alejandro.garcia@email.com".to_string(),
            phone: "+51 987 654 321".to_string(),
            tier: "Nivel Oro".to_string(),
            points: 12_450,
        },
        accounts: vec![
            account("1", "Cuenta Simple Soles", "191-****4567-0-12", 1_245_000, Pen, AccountType::Savings),
            account("2", "Cuenta Dólares", "191-****8912-0-44", 112_000, Usd, AccountType::Savings),
            account("3", "Cuenta Sueldo Soles", "191-****9231-0-71", 85_020, Pen, AccountType::Checking),
            visa,
        ],
        contacts: vec![
            contact("c1", "Juan Perez", "BCP Soles", "*4521", true),
            contact("c2", "María López", "Interbank", "*7710", true),
            contact("c3", "Carlos Ruiz", "BBVA", "*3388", true),
            contact("c4", "Ana Torres", "Scotiabank", "*9021", true),
            contact("c5", "Luis Gómez", "BCP Soles", "*1204", false),
        ],
        transactions: vec![
            transaction("t1", "Sueldo Mayo", "Ingresos", as_of, 450_000, Pen, Income),
            transaction("t2", "Starbucks", "Restaurantes", date(2024, 5, 23), 1_850, Pen, Expense),
            transaction("t3", "Netflix", "Suscripciones", date(2024, 5, 23), 4_490, Pen, Expense),
            transaction("t4", "Wong Supermercado", "Supermercado", date(2024, 5, 20), 23_540, Pen, Expense),
            transaction("t5", "Uber", "Transporte", date(2024, 5, 19), 2_200, Pen, Expense),
            transaction("t6", "Transferencia recibida", "Transferencias", date(2024, 5, 18), 15_000, Usd, Income),
        ],
        goals: vec![
            goal("g1", "Fondo de Emergencia", "Seguridad Financiera", 8_000, 10_000, Pen),
            goal("g2", "Viaje a Cusco", "Vacaciones", 400, 1_200, Usd),
            goal("g3", "Nueva Laptop", "Trabajo", 1_500, 4_500, Pen),
            goal("g4", "Depa Propio", "Largo Plazo", 2_500, 50_000, Usd),
        ],
        service_categories: ["Luz", "Agua", "Internet y TV", "Educación", "Seguros"]
            .into_iter()
            .map(String::from)
            .collect(),
        billers: vec![
            biller(
                "b1",
                "Sedapal",
                "Departamento Lima",
                "Agua",
                vec![bill("Octubre 2023", "Vence 20 Oct", 6_830, false)],
            ),
            biller(
                "b2",
                "Luz del Sur",
                "Casa Playa",
                "Luz",
                vec![
                    bill("Octubre 2023", "Vencido 15 Oct", 14_250, true),
                    bill("Noviembre 2023", "Vence 15 Nov", 13_500, false),
                    bill("Diciembre 2023", "Vence 15 Dic", 12_000, false),
                ],
            ),
            biller(
                "b3",
                "Claro",
                "Internet Hogar",
                "Internet y TV",
                vec![bill("Octubre 2023", "Vence 28 Oct", 11_990, false)],
            ),
            biller(
                "b4",
                "Pacífico Seguros",
                "Seguro Vehicular",
                "Seguros",
                vec![bill("Octubre 2023", "Vence 30 Oct", 21_000, false)],
            ),
        ],
        merchants: vec![
            Merchant {
                id: "m1".into(),
                name: "Café Central".to_string(),
                code: "89439201".to_string(),
                suggested_amount: Money::from_cents(2_500),
            },
            Merchant {
                id: "m2".into(),
                name: "Bodega Doña Juana".to_string(),
                code: "77120455".to_string(),
                suggested_amount: Money::from_cents(2_550),
            },
        ],
        branches: vec![
            branch(
                "Agencia San Isidro",
                BranchKind::Agency,
                "Av. Javier Prado Oeste 1234",
                "500m",
                true,
                "Cierra 6:00 PM",
            ),
            branch(
                "Cajero Plaza Vea",
                BranchKind::Atm,
                "Av. Arequipa 4500",
                "1.2km",
                false,
                "Mantenimiento",
            ),
            branch(
                "Agencia Miraflores",
                BranchKind::Agency,
                "Av. Larco 845",
                "2.4km",
                true,
                "Cierra 7:00 PM",
            ),
        ],
        notifications: vec![
            notification(
                "Transferencia recibida",
                "Recibiste $ 150.00 de Luis Gómez",
                "10:24 AM",
                true,
                true,
            ),
            notification(
                "Consumo con tarjeta",
                "Compra de S/ 18.50 en Starbucks",
                "08:02 AM",
                true,
                true,
            ),
            notification(
                "Recibo por vencer",
                "Tu recibo de Luz del Sur vence el 15 Nov",
                "Ayer",
                false,
                false,
            ),
            notification(
                "Meta alcanzada al 80%",
                "Fondo de Emergencia está cerca de completarse",
                "Lun",
                false,
                false,
            ),
        ],
        offers: vec![
            offer("50% desc.", "En todo Starbucks con tu tarjeta", "Vence hoy"),
            offer("Millas dobles", "Al viajar con LATAM", "Nuevo"),
            offer("2x1 en entradas", "Cineplanet de lunes a miércoles", "Popular"),
        ],
        rates: ExchangeRates::default(),
        loan_offer: LoanOffer::default(),
    }
}
