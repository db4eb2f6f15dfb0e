//! The placeholder dataset loaded by the dashboard seeder.

use time::macros::date;
use uuid::uuid;

use crate::records::{CustomerFixture, FixtureSet, InvoiceFixture, RevenueFixture, UserFixture};

const DELBA: uuid::Uuid = uuid!("3958dc9e-712f-4377-85e9-fec4b6a6442a");
const LEE: uuid::Uuid = uuid!("3958dc9e-742f-4377-85e9-fec4b6a6442a");
const HECTOR: uuid::Uuid = uuid!("3958dc9e-737f-4377-85e9-fec4b6a6442a");
const STEVEN: uuid::Uuid = uuid!("50ca3e18-62cd-11ee-8c99-0242ac120002");
const STEPH: uuid::Uuid = uuid!("3958dc9e-787f-4377-85e9-fec4b6a6442a");
const MICHAEL: uuid::Uuid = uuid!("76d65c26-f784-44a2-ac19-586678f7c2f2");
const EVIL_RABBIT: uuid::Uuid = uuid!("d6e15727-9fe1-4961-8c5b-ea44a9bd81aa");
const EMIL: uuid::Uuid = uuid!("126eed9c-c90c-4ef6-a4a8-fcf7408d3c66");
const AMY: uuid::Uuid = uuid!("cc27c14a-0acf-4f4a-a6c9-d45682c144b9");
const BALAZS: uuid::Uuid = uuid!("13d07535-c59e-4157-a011-f8d2ef4e0cbb");

static USERS: [UserFixture<'static>; 1] = [UserFixture {
    id: uuid!("410544b2-4001-4271-9855-fec4b6a6442a"),
    name: "User",
    email: "user@nextmail.com",
    password: "123456",
}];

static CUSTOMERS: [CustomerFixture<'static>; 10] = [
    CustomerFixture {
        id: DELBA,
        name: "Delba de Oliveira",
        email: "delba@oliveira.com",
        image_url: "/customers/delba-de-oliveira.png",
    },
    CustomerFixture {
        id: LEE,
        name: "Lee Robinson",
        email: "lee@robinson.com",
        image_url: "/customers/lee-robinson.png",
    },
    CustomerFixture {
        id: HECTOR,
        name: "Hector Simpson",
        email: "hector@simpson.com",
        image_url: "/customers/hector-simpson.png",
    },
    CustomerFixture {
        id: STEVEN,
        name: "Steven Tey",
        email: "steven@tey.com",
        image_url: "/customers/steven-tey.png",
    },
    CustomerFixture {
        id: STEPH,
        name: "Steph Dietz",
        email: "steph@dietz.com",
        image_url: "/customers/steph-dietz.png",
    },
    CustomerFixture {
        id: MICHAEL,
        name: "Michael Novotny",
        email: "michael@novotny.com",
        image_url: "/customers/michael-novotny.png",
    },
    CustomerFixture {
        id: EVIL_RABBIT,
        name: "Evil Rabbit",
        email: "evil@rabbit.com",
        image_url: "/customers/evil-rabbit.png",
    },
    CustomerFixture {
        id: EMIL,
        name: "Emil Kowalski",
        email: "emil@kowalski.com",
        image_url: "/customers/emil-kowalski.png",
    },
    CustomerFixture {
        id: AMY,
        name: "Amy Burns",
        email: "amy@burns.com",
        image_url: "/customers/amy-burns.png",
    },
    CustomerFixture {
        id: BALAZS,
        name: "Balazs Orban",
        email: "balazs@orban.com",
        image_url: "/customers/balazs-orban.png",
    },
];

static INVOICES: [InvoiceFixture<'static>; 15] = [
    InvoiceFixture {
        customer_id: DELBA,
        amount: 15795,
        status: "pending",
        date: date!(2022 - 12 - 06),
    },
    InvoiceFixture {
        customer_id: LEE,
        amount: 20348,
        status: "pending",
        date: date!(2022 - 11 - 14),
    },
    InvoiceFixture {
        customer_id: EVIL_RABBIT,
        amount: 3040,
        status: "paid",
        date: date!(2022 - 10 - 29),
    },
    InvoiceFixture {
        customer_id: MICHAEL,
        amount: 44800,
        status: "paid",
        date: date!(2023 - 09 - 10),
    },
    InvoiceFixture {
        customer_id: AMY,
        amount: 34577,
        status: "pending",
        date: date!(2023 - 08 - 05),
    },
    InvoiceFixture {
        customer_id: STEPH,
        amount: 54246,
        status: "pending",
        date: date!(2023 - 07 - 16),
    },
    InvoiceFixture {
        customer_id: EMIL,
        amount: 666,
        status: "pending",
        date: date!(2023 - 06 - 27),
    },
    InvoiceFixture {
        customer_id: MICHAEL,
        amount: 32545,
        status: "paid",
        date: date!(2023 - 06 - 09),
    },
    InvoiceFixture {
        customer_id: EVIL_RABBIT,
        amount: 1250,
        status: "paid",
        date: date!(2023 - 06 - 17),
    },
    InvoiceFixture {
        customer_id: AMY,
        amount: 8546,
        status: "paid",
        date: date!(2023 - 06 - 07),
    },
    InvoiceFixture {
        customer_id: LEE,
        amount: 500,
        status: "paid",
        date: date!(2023 - 08 - 19),
    },
    InvoiceFixture {
        customer_id: AMY,
        amount: 8945,
        status: "paid",
        date: date!(2023 - 06 - 03),
    },
    InvoiceFixture {
        customer_id: HECTOR,
        amount: 32545,
        status: "paid",
        date: date!(2023 - 06 - 18),
    },
    InvoiceFixture {
        customer_id: STEVEN,
        amount: 1000,
        status: "paid",
        date: date!(2022 - 06 - 05),
    },
    InvoiceFixture {
        customer_id: BALAZS,
        amount: 8945,
        status: "pending",
        date: date!(2023 - 10 - 12),
    },
];

static REVENUE: [RevenueFixture<'static>; 12] = [
    RevenueFixture { month: "Jan", revenue: 2000 },
    RevenueFixture { month: "Feb", revenue: 1800 },
    RevenueFixture { month: "Mar", revenue: 2200 },
    RevenueFixture { month: "Apr", revenue: 2500 },
    RevenueFixture { month: "May", revenue: 2300 },
    RevenueFixture { month: "Jun", revenue: 3200 },
    RevenueFixture { month: "Jul", revenue: 3500 },
    RevenueFixture { month: "Aug", revenue: 3700 },
    RevenueFixture { month: "Sep", revenue: 2500 },
    RevenueFixture { month: "Oct", revenue: 2800 },
    RevenueFixture { month: "Nov", revenue: 3000 },
    RevenueFixture { month: "Dec", revenue: 4800 },
];

/// Every collection above, in the shape the seeder consumes.
pub static PLACEHOLDER_DATA: FixtureSet<'static> = FixtureSet {
    users: &USERS,
    customers: &CUSTOMERS,
    invoices: &INVOICES,
    revenue: &REVENUE,
};
