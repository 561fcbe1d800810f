mod backlog_graph;
mod export_config;
mod rating;
mod work_item_kind;
