//! Sample catalogs.
//!
//! A reference residential-construction template with realistic
//! dependency structure: long inspection chains, parallel trade work
//! (plumbing/HVAC/electrical), and zero-duration inspection milestones.
//! Used by demos and as an integration fixture.

use crate::models::{Catalog, CatalogEntry};

/// Group name for the construction template.
pub const CONSTRUCTION_GROUP: &str = "New Mexico Template";

/// `(name, duration in days, predecessor names)` for every task in the
/// template, in build order.
const CONSTRUCTION_TASKS: &[(&str, u32, &[&str])] = &[
    ("Soil Remediation", 6, &[]),
    ("Form Pins", 1, &["Soil Remediation"]),
    ("Form Layout", 2, &["Form Pins"]),
    ("Plumb soil", 2, &["Form Layout"]),
    ("Plumbing Inspection", 3, &["Plumb soil"]),
    ("Footings", 2, &["Plumbing Inspection"]),
    ("Post Tension", 2, &["Footings"]),
    ("Monolithic Inspection", 3, &["Post Tension"]),
    ("Slab", 2, &["Monolithic Inspection"]),
    ("Grade", 2, &["Slab"]),
    ("Material Delivery", 0, &["Grade"]),
    ("Frame", 4, &["Material Delivery"]),
    ("Window Install", 2, &["Frame"]),
    ("Roof Trusses", 3, &["Frame"]),
    ("Exterior Trim", 2, &["Roof Trusses"]),
    ("Foreman Frame Walk", 2, &["Roof Trusses"]),
    ("Exterior Sheathing Inspection", 0, &["Exterior Trim"]),
    ("Stucco Wire Mesh", 3, &["Exterior Sheathing Inspection"]),
    ("Stucco Lath Inspection", 0, &["Stucco Wire Mesh"]),
    ("Plumbing Top Out", 3, &["Foreman Frame Walk"]),
    ("HVAC Rough", 4, &["Foreman Frame Walk"]),
    ("Plumbing Inspection Phase 2", 0, &["Plumbing Top Out"]),
    ("Electrical Rough", 3, &["Plumbing Top Out", "HVAC Rough"]),
    ("Roofing", 2, &["Plumbing Top Out", "HVAC Rough"]),
    ("Electrical Inspection", 0, &["Electrical Rough"]),
    ("HVAC Inspection", 0, &["HVAC Rough"]),
    ("Prewire", 2, &["Electrical Rough"]),
    ("Prewire Inspection", 0, &["Prewire"]),
    ("In House Inspections", 4, &["Prewire", "Roofing"]),
    ("City Inspection", 10, &["In House Inspections"]),
    ("Insulation", 3, &["City Inspection"]),
    ("Insulation Inspection", 2, &["Insulation"]),
    ("Drywall Hang", 4, &["Insulation Inspection"]),
    ("Drywall Inspection", 3, &["Drywall Hang"]),
    ("Drywall Tape/Texture", 4, &["Drywall Inspection"]),
    ("Paint Walls", 2, &["Drywall Tape/Texture"]),
    ("Stucco Brown Coat", 2, &["Drywall Tape/Texture"]),
    ("Floor Tile Install", 3, &["Paint Walls"]),
    ("Door & Trim", 4, &["Floor Tile Install"]),
    ("Tile Shower Walls", 4, &["Floor Tile Install"]),
    ("Cabinet Install", 1, &["Door & Trim"]),
    ("Grout", 2, &["Tile Shower Walls"]),
    ("Foreman Cabinet/Home Inspection", 4, &["Cabinet Install"]),
    ("Trim Paint", 3, &["Foreman Cabinet/Home Inspection"]),
    ("Granite", 2, &["Foreman Cabinet/Home Inspection"]),
    ("Plumbing Final", 2, &["Granite"]),
    ("Backsplash Tile", 1, &["Granite"]),
    ("Electrical Final", 3, &["Granite"]),
    ("Plumbing/HVAC Inspection", 3, &["Plumbing Final"]),
    ("Prewire Final", 1, &["Electrical Final"]),
    ("Carpet Install", 2, &["Electrical Final"]),
    ("Appliances", 1, &["Electrical Final"]),
    ("Order Gas Meter", 0, &["Plumbing/HVAC Inspection"]),
    ("Electrical/Prewire Inspection", 3, &["Prewire Final", "Appliances"]),
    ("Trim Final", 2, &["Carpet Install"]),
    ("Paint Finals (Int. & Ext)", 4, &["Electrical/Prewire Inspection"]),
    ("Prospec Inspections", 1, &["Electrical/Prewire Inspection"]),
    ("Clean & Cabinet Detail", 2, &["Paint Finals (Int. & Ext)"]),
    ("Zia Detail", 5, &["Clean & Cabinet Detail"]),
    ("Stucco Color", 2, &["Stucco Brown Coat"]),
    ("Flatwork Forms", 1, &["Stucco Brown Coat"]),
    ("Flatwork Inspection", 3, &["Flatwork Forms"]),
    ("Flatwork Pour", 1, &["Flatwork Inspection"]),
    ("Final Grade", 2, &["Flatwork Pour"]),
    ("HVAC Final", 2, &["Flatwork Pour"]),
    ("Final inspection", 3, &["Zia Detail"]),
];

/// Builds the construction-project catalog: one group containing every
/// template task.
pub fn construction_catalog() -> Catalog {
    let mut catalog = Catalog::new().with_group(CONSTRUCTION_GROUP);
    for &(name, duration_days, predecessors) in CONSTRUCTION_TASKS {
        catalog = catalog.with_entry(
            CatalogEntry::new(name, duration_days)
                .with_predecessors(predecessors.iter().copied())
                .with_group(CONSTRUCTION_GROUP),
        );
    }
    catalog
}
