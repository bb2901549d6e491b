//! 照片依城市與拍攝時間重新命名元件
//!
//! 驗證每一行照片資訊，依城市分組並依拍攝時間給予流水號

mod city_grouper;
mod error;
mod main;
mod organizer;
mod photo_parser;
mod sequence_assigner;

pub use city_grouper::{CityGroup, CityGrouper, validate_photo_count};
pub use error::OrganizeError;
pub use main::PhotoRenamer;
pub use organizer::{PhotoOrganizer, RenamePlan, organize};
pub use photo_parser::{ParsedPhoto, PhotoExtension, PhotoParser, TakenAt};
pub use sequence_assigner::{RenamedPhoto, assign_sequence, digit_width, format_new_filename};
