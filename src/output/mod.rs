mod formatter;

pub use formatter::{
    format_grade_detail, format_grade_table, format_stats, format_task_table, should_use_colors,
};
