//! Common test utilities for marketplace integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use tempfile::TempDir;

use mentora_core::{AccountId, Course, NewCourse, NewLesson, NewModule, NewUser, Role};
use mentora_market::{MarketConfig, Marketplace};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The marketplace engine under test.
    pub market: Marketplace,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with a fresh database and no platform fee.
    pub fn new() -> Self {
        Self::with_config(MarketConfig::default())
    }

    /// Create a harness charging `fee_percent` of the price to `treasury`.
    pub fn with_fee(fee_percent: u8, treasury: &str) -> Self {
        Self::with_config(MarketConfig {
            platform_fee_percent: fee_percent,
            treasury_account: Some(account(treasury)),
            ..MarketConfig::default()
        })
    }

    fn with_config(mut config: MarketConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        config.data_dir = temp_dir.path().to_string_lossy().to_string();
        let market = Marketplace::open_from_config(config).expect("Failed to open marketplace");

        Self {
            market,
            _temp_dir: temp_dir,
        }
    }

    /// Register a mentor profile named after the account.
    pub fn register_mentor(&self, name: &str) -> AccountId {
        let id = account(name);
        self.market
            .create_user(&id, profile(name, Role::Mentor))
            .expect("Failed to create mentor");
        id
    }

    /// Register a student profile named after the account.
    pub fn register_student(&self, name: &str) -> AccountId {
        let id = account(name);
        self.market
            .create_user(&id, profile(name, Role::Student))
            .expect("Failed to create student");
        id
    }

    /// Create a draft course owned by `mentor` at the given price.
    pub fn draft_course(&self, mentor: &AccountId, price: u128) -> Course {
        self.market
            .create_course(mentor, new_course(price))
            .expect("Failed to create course")
    }

    /// Create and publish a course owned by `mentor` at the given price.
    pub fn published_course(&self, mentor: &AccountId, price: u128) -> Course {
        let course = self.draft_course(mentor, price);
        self.market
            .publish_course(mentor, course.id, 2_000)
            .expect("Failed to publish course")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a test account name.
pub fn account(name: &str) -> AccountId {
    AccountId::new(name).expect("invalid test account name")
}

/// A profile payload with the account name doubling as username.
pub fn profile(name: &str, role: Role) -> NewUser {
    NewUser {
        name: name.to_string(),
        username: name.to_string(),
        email: format!("{name}@gmail.com"),
        role,
        password_hash: "123456789".into(),
        by_google: false,
        bio: "I am a software engineer".into(),
        skills: vec!["Rust".into()],
        certifications: vec![],
        education: vec![],
        picture: String::new(),
        created_at: 1_000,
    }
}

/// A course payload at the given price.
pub fn new_course(price: u128) -> NewCourse {
    NewCourse {
        title: "React From Scratch".into(),
        description: "Build React apps from first principles".into(),
        level: "beginner".into(),
        duration: "1 month".into(),
        category: "web development".into(),
        tags: vec!["React".into(), "JavaScript".into()],
        price,
        picture: String::new(),
        with_ai: false,
        created_at: 1_500,
    }
}

/// A module payload at the given display position.
pub fn new_module(title: &str, order: u64) -> NewModule {
    NewModule {
        title: title.to_string(),
        description: "module description".into(),
        status: "created".into(),
        order,
        with_ai: false,
        created_at: 1_600,
    }
}

/// A lesson payload at the given display position.
pub fn new_lesson(title: &str, order: u64) -> NewLesson {
    NewLesson {
        title: title.to_string(),
        description: "lesson description".into(),
        order,
        video_url: "https://videos.example/intro.mp4".into(),
        article: String::new(),
        with_ai: false,
        created_at: 1_700,
    }
}
