pub mod markup_view;
pub mod style_sheet;
