//! Core types for the Mentora course marketplace.
//!
//! This crate provides the foundational types used throughout the platform:
//!
//! - **Identifiers**: `AccountId`, `CourseId`, `ModuleId`, `LessonId`
//! - **Identity**: `User`, `Role`
//! - **Catalog**: `Course`, `Module`, `Lesson`, `FullCourse`
//! - **Enrollment**: `Enrollment`, `Wallet`
//!
//! # Payment unit
//!
//! All prices and balances are denominated in the smallest unit of the host
//! platform's currency and stored as `u128`. A course priced at `6` costs
//! exactly 6 units; there is no fractional representation anywhere.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod enrollment;
pub mod error;
pub mod ids;
pub mod user;
pub mod wallet;

pub use catalog::{
    Course, CourseStatus, FullCourse, FullModule, Lesson, Module, NewCourse, NewLesson, NewModule,
};
pub use enrollment::Enrollment;
pub use error::{ErrorKind, MarketError, Result};
pub use ids::{AccountId, CourseId, IdError, LessonId, ModuleId};
pub use user::{NewUser, Role, User};
pub use wallet::Wallet;
