pub mod common_prefix_len;
pub mod common_suffix_len;
pub mod side;
pub mod string_builder;
pub mod string_or_nothing;
