pub mod common;

pub mod a001_discount;
pub mod a002_tax;
pub mod a003_protein_plan;
pub mod a004_supplier;
pub mod a005_ingredient_category;
pub mod a006_week;
