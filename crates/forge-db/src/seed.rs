//! # Demo Data
//!
//! Generates customers and raw materials for development databases.
//!
//! Every generated record passes the forge-core validators, so demo data can
//! be opened and re-saved from the edit forms without errors. Used by the
//! `seed` binary and by `forge-admin` when `FORGE_SEED=true`.

use chrono::Utc;
use tracing::{info, warn};

use crate::error::DbResult;
use crate::pool::Database;
use crate::repository::generate_id;
use forge_core::validation::{validate_customer, validate_material, FormMode};
use forge_core::{
    BankDetails, CreditTerms, Customer, CustomerDraft, Material, MaterialDraft, NumberInput,
    UnitOfMeasure,
};

/// Default number of generated customers.
pub const DEFAULT_CUSTOMER_COUNT: usize = 25;

/// Company name stems for demo customers.
const COMPANIES: &[&str] = &[
    "Acme Forgings",
    "Bharat Castings",
    "Deccan Auto Components",
    "Everest Fasteners",
    "Ganga Precision Tools",
    "Himalaya Bearings",
    "Indus Pressings",
    "Kaveri Gears",
    "Narmada Springs",
    "Sahyadri Engineering",
];

/// Cities and their GST state codes.
const CITIES: &[(&str, u32)] = &[
    ("Pune", 27),
    ("Chennai", 33),
    ("Bengaluru", 29),
    ("Ahmedabad", 24),
    ("Ludhiana", 3),
];

/// Raw-material catalogue: (material ID, name, unit, stock, min level, supplier).
const MATERIALS: &[(&str, &str, UnitOfMeasure, i64, Option<i64>, &str)] = &[
    ("RM-STEEL01", "Mild steel sheet 2mm", UnitOfMeasure::Ton, 18, Some(5), "Tata Steel"),
    ("RM-STEEL02", "Stainless steel rod 304", UnitOfMeasure::Kg, 240, Some(300), "Jindal Stainless"),
    ("RM-AL6061", "Aluminium billet 6061", UnitOfMeasure::Kg, 950, Some(200), "Hindalco"),
    ("RM-CU100", "Copper wire 1mm", UnitOfMeasure::M, 4000, Some(1000), "Hindalco"),
    ("RM-BRASS20", "Brass strip", UnitOfMeasure::Kg, 0, Some(50), "Sagar Metals"),
    ("RM-OIL46", "Hydraulic oil ISO 46", UnitOfMeasure::L, 120, Some(40), "Castrol India"),
    ("RM-PAINT01", "Primer, grey", UnitOfMeasure::L, 35, None, "Asian Paints"),
    ("RM-BOLTM8", "Hex bolt M8x40", UnitOfMeasure::Pcs, 12000, Some(2000), "Everest Fasteners"),
    ("RM-RUBBER", "Nitrile rubber sheet", UnitOfMeasure::Kg, 60, Some(60), "Apollo Polymers"),
    ("RM-GREASE", "Lithium grease", UnitOfMeasure::G, 8000, None, "Servo"),
];

/// What a seeding run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Records already present; non-zero means nothing was inserted.
    pub existing: i64,
    pub customers: usize,
    pub materials: usize,
}

impl SeedReport {
    /// True when the database already had data and seeding was skipped.
    pub fn skipped(&self) -> bool {
        self.existing > 0
    }
}

/// Seeds `customer_count` customers and the material catalogue.
///
/// Does nothing when either table already has rows. Records that fail to
/// insert are logged and skipped.
pub async fn seed_demo_data(db: &Database, customer_count: usize) -> DbResult<SeedReport> {
    let existing = db.customers().count().await? + db.materials().count().await?;
    if existing > 0 {
        info!(existing, "Database not empty, skipping seed");
        return Ok(SeedReport {
            existing,
            ..SeedReport::default()
        });
    }

    let mut report = SeedReport::default();

    for n in 0..customer_count {
        let draft = customer_draft(n);
        let errors = validate_customer(&draft);
        if !errors.is_empty() {
            warn!(n, %errors, "Generated customer failed validation");
            continue;
        }

        let customer = Customer::from_draft(generate_id(), &draft, Utc::now());
        match db.customers().insert(&customer).await {
            Ok(()) => report.customers += 1,
            Err(e) => warn!(company = %customer.company_name, error = %e, "Seed insert failed"),
        }
    }

    for draft in material_drafts() {
        let errors = validate_material(&draft, FormMode::Create);
        if !errors.is_empty() {
            warn!(material_id = %draft.material_id, %errors, "Catalogue material failed validation");
            continue;
        }

        let material = Material::from_draft(generate_id(), &draft, Utc::now());
        match db.materials().insert(&material).await {
            Ok(()) => report.materials += 1,
            Err(e) => warn!(material_id = %material.material_id, error = %e, "Seed insert failed"),
        }
    }

    info!(
        customers = report.customers,
        materials = report.materials,
        "Seeded demo data"
    );
    Ok(report)
}

/// Builds the `n`th demo customer. Tax identifiers are derived from `n`.
pub fn customer_draft(n: usize) -> CustomerDraft {
    let stem = COMPANIES[n % COMPANIES.len()];
    let company_name = if n < COMPANIES.len() {
        stem.to_string()
    } else {
        format!("{} Unit {}", stem, n / COMPANIES.len() + 1)
    };
    let (city, state_code) = CITIES[n % CITIES.len()];
    let slug: String = stem
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();

    let pan = format!("{}{:04}{}", letters(n, 5), n % 10_000, letter(n));
    let gst = format!("{:02}{}{}Z{}", state_code, pan, entity_code(n), letter(n + 7));
    let tan = format!("{}{:05}{}", letters(n + 3, 4), n % 100_000, letter(n + 1));

    CustomerDraft {
        company_name: company_name.clone(),
        phone: format!("+91 98{:08}", n),
        email: format!("info{}@{}.in", n, slug),
        address: format!("Plot {}, Industrial Area, {}", 10 + n, city),
        gst,
        pan,
        tan,
        commercial_email: format!("accounts{}@{}.in", n, slug),
        credit_terms: Some(CreditTerms::ALL[n % CreditTerms::ALL.len()]),
        credit_days: Some(NumberInput::from(((n * 15) % 91) as i64)),
        part_numbers: vec![format!("PN-{:04}", n * 3), format!("PN-{:04}", n * 3 + 1)],
        bank_details: BankDetails {
            account_holder_name: company_name,
            bank_name: "State Bank of India".to_string(),
            account_number: format!("{:014}", 10_000_000 + n),
            ifsc_code: format!("SBIN{:07}", n % 10_000_000),
            branch: city.to_string(),
        },
    }
}

/// The fixed raw-material catalogue as drafts.
pub fn material_drafts() -> Vec<MaterialDraft> {
    MATERIALS
        .iter()
        .map(|&(material_id, name, unit, stock, min, supplier)| MaterialDraft {
            material_id: material_id.to_string(),
            name: name.to_string(),
            description: String::new(),
            unit,
            current_stock: Some(NumberInput::from(stock)),
            min_stock_level: min.map(NumberInput::from),
            supplier: supplier.to_string(),
        })
        .collect()
}

fn letter(n: usize) -> char {
    (b'A' + (n % 26) as u8) as char
}

/// `len` uppercase letters spelling `n` in base 26.
fn letters(mut n: usize, len: usize) -> String {
    let mut out = vec!['A'; len];
    for slot in out.iter_mut().rev() {
        *slot = letter(n);
        n /= 26;
    }
    out.into_iter().collect()
}

/// GST entity number: 1-9, then A-Z.
fn entity_code(n: usize) -> char {
    const CODES: &[u8] = b"123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    CODES[n % CODES.len()] as char
}
