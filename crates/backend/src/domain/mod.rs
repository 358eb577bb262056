pub mod a001_application;
pub mod a002_component;
pub mod a003_pipeline_run;
