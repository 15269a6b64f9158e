//! Marketplace engine for Mentora.
//!
//! The engine is the contract's state machine: it resolves the caller,
//! enforces roles and ownership, drives the draft-to-published course life
//! cycle and settles enrollment payments. Every mutating entry point takes
//! an explicit `caller` so authorization stays pure and testable without a
//! simulated execution context.
//!
//! The hosting platform serializes invocations; the engine's obligation is
//! that each call either commits all of its effects or none of them.
//!
//! # Example
//!
//! ```no_run
//! use mentora_core::AccountId;
//! use mentora_market::{MarketConfig, Marketplace};
//!
//! let market = Marketplace::open("/tmp/mentora-db", MarketConfig::default()).unwrap();
//! let ahmed = AccountId::new("ahmed").unwrap();
//! market.deposit(&ahmed, 100).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod catalog;
mod config;
mod enrollment;
mod identity;

pub use config::MarketConfig;

use std::path::Path;
use std::sync::Arc;

use mentora_core::{
    AccountId, Course, CourseId, Lesson, LessonId, MarketError, Module, ModuleId, Result, User,
};
use mentora_store::{RocksStore, Store};

/// The marketplace contract state and entry points.
///
/// Entry points are grouped into identity ([`Marketplace::create_user`]),
/// catalog ([`Marketplace::create_course`] and friends) and enrollment
/// ([`Marketplace::enroll_course`]); the groups live in their own modules
/// but share this one state handle.
pub struct Marketplace {
    store: Arc<dyn Store>,
    config: MarketConfig,
}

impl Marketplace {
    /// Open the marketplace over a `RocksDB` database at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P, config: MarketConfig) -> Result<Self> {
        let store = RocksStore::open(path).map_err(MarketError::from)?;
        Ok(Self::with_store(Arc::new(store), config))
    }

    /// Open the marketplace at the data directory named in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_from_config(config: MarketConfig) -> Result<Self> {
        let store = RocksStore::open(&config.data_dir).map_err(MarketError::from)?;
        Ok(Self::with_store(Arc::new(store), config))
    }

    /// Build the marketplace over any [`Store`] implementation.
    #[must_use]
    pub fn with_store(store: Arc<dyn Store>, config: MarketConfig) -> Self {
        Self { store, config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    // Internal lookups shared by the entry-point modules. Each converts an
    // absent record into the matching not-found error.

    pub(crate) fn user(&self, account_id: &AccountId) -> Result<User> {
        self.store
            .get_user(account_id)?
            .ok_or_else(|| MarketError::UserNotFound {
                account_id: account_id.to_string(),
            })
    }

    pub(crate) fn course(&self, course_id: CourseId) -> Result<Course> {
        self.store
            .get_course(course_id)?
            .ok_or(MarketError::CourseNotFound {
                course_id: course_id.value(),
            })
    }

    pub(crate) fn module(&self, module_id: ModuleId) -> Result<Module> {
        self.store
            .get_module(module_id)?
            .ok_or(MarketError::ModuleNotFound {
                module_id: module_id.value(),
            })
    }

    pub(crate) fn lesson(&self, lesson_id: LessonId) -> Result<Lesson> {
        self.store
            .get_lesson(lesson_id)?
            .ok_or(MarketError::LessonNotFound {
                lesson_id: lesson_id.value(),
            })
    }

    pub(crate) fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
}
