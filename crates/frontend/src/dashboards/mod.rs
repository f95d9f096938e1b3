pub mod d400_community_summary;
pub mod d401_activity_report;
