pub mod bjs_recidivism;
pub mod cdc_hiv;
pub mod missouri_doc;
pub mod summary;
