pub mod cache;
pub mod grid;
pub mod pager;
pub mod sections;

pub use cache::{
    generation_name, offline_fallback, should_intercept, should_store, stale_generations,
    ResponseKind, OFFLINE_FALLBACK_PATH, PRECACHE_PATHS,
};
pub use grid::{hovered_cell, visible_cells, GridDirection, GridMotion, GridOffset};
pub use pager::{JumpDirection, WheelDecision, WheelPager, JUMP_COOLDOWN_MS};
pub use sections::{boundary_target, current_section, jump_target, SectionRect, SECTION_IDS};
