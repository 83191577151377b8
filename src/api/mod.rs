mod animation;
mod builder;
mod chart;
mod collaborators;
mod component;
mod drag;
mod drop_box;
mod json_contract;
mod option;
mod style;
mod symbols;

pub use animation::{
    AnimationTask, ENTRANCE_START_SCALE, Easing, STAGGER_DELAY_MS, plan_entrance_animation,
};
pub use builder::{BuildOutput, RadarSeriesBuilder, SelectionMap};
pub use chart::RadarChart;
pub use collaborators::{Collaborators, Legend, MarkBuilder, NoMarks};
pub use component::{BaseSeriesComponent, CalculableSeriesComponent};
pub use drag::{handle_drag_in, handle_drag_out};
pub use drop_box::{DropBoxEntry, DropTargetRegistry};
pub use json_contract::{SHAPE_LIST_JSON_SCHEMA_V1, ShapeListJsonContractV1};
pub use option::{
    AreaStyleOption, DataItem, ItemStyleOption, LineStyleOption, RadarOption,
    RadarSeriesDefaults, SeriesOption, SeriesType, StateStyleOption, StyleLayer,
};
pub use style::{
    DEFAULT_FILL_ALPHA, ResolvedItemStyle, ResolvedStateStyle, item_area_fill_enabled,
    resolve_item_style,
};
pub use symbols::{ItemContext, place_symbols, select_symbol};
