pub mod prompts;
pub mod render;

pub use prompts::{collect_query, prompt_sex, prompt_weight, prompt_yes_no};
pub use render::{
    display_catalog_summary, display_diet_plan, display_requirement, free_candidate_warning,
    warn_free_candidates,
};
