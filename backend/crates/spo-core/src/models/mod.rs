pub mod backlog_graph;
pub mod epic;
pub mod export_config;
pub mod feature;
pub mod graph_counts;
pub mod rating;
pub mod remote_work_item;
pub mod user_story;
pub mod work_item_kind;
