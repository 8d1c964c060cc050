pub mod common;

pub mod a001_client;
pub mod a002_supplier;
pub mod a003_financial_entry;
pub mod a004_production_order;
pub mod a005_mix_formula;
pub mod a006_quality_test;
pub mod a007_report;
