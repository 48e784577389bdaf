mod catalog;
mod render_pipeline;
mod search_contract;
