//! Fixed data pools for the value generator.
//!
//! Immutable tables owned by this crate; the generator draws from them with
//! the run's seeded RNG.

pub(crate) const LOREM_WORDS: &[&str] = &[
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
    "enim",
    "ad",
    "minim",
    "veniam",
    "quis",
    "nostrud",
    "exercitation",
    "ullamco",
    "laboris",
    "nisi",
    "aliquip",
    "ex",
    "ea",
    "commodo",
    "consequat",
    "duis",
    "aute",
    "irure",
    "in",
    "reprehenderit",
    "voluptate",
    "velit",
    "esse",
    "cillum",
    "fugiat",
    "nulla",
    "pariatur",
    "excepteur",
    "sint",
];

pub(crate) const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Christopher", "Karen", "Charles", "Nancy", "Daniel", "Lisa", "Matthew", "Betty", "Anthony",
    "Helen", "Mark", "Sandra", "Donald", "Donna",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
];

pub(crate) const COMPANIES: &[&str] = &[
    "TechCorp",
    "DataSys",
    "InfoTech",
    "SoftWare Inc",
    "Digital Solutions",
    "CloudTech",
    "WebSystems",
    "AppDev Ltd",
    "CodeCraft",
    "ByteWorks",
    "NetLogic",
    "DevForce",
    "TechFlow",
    "DataStream",
    "CyberTech",
];

pub(crate) const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "test.org",
    "sample.net",
    "demo.com",
    "dev.local",
    "staging.org",
    "dummy.net",
    "fake.com",
    "mock.org",
];

pub(crate) const STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Pine Rd", "First St", "Second Ave", "Park Blvd", "Elm St",
];

pub(crate) const CITIES: &[&str] = &[
    "Springfield",
    "Madison",
    "Franklin",
    "Georgetown",
    "Clinton",
    "Riverside",
    "Fairview",
];

pub(crate) const STATES: &[&str] = &[
    "CA", "NY", "TX", "FL", "IL", "PA", "OH", "GA", "NC", "MI",
];

pub(crate) const URL_DOMAINS: &[&str] = &["example.com", "test.org", "demo.net"];
