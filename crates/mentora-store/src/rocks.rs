//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `Store` trait.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options, WriteBatch,
};

use mentora_core::{
    AccountId, Course, CourseId, Enrollment, Lesson, LessonId, Module, ModuleId, NewCourse,
    NewLesson, NewModule, User, Wallet,
};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf, counter};
use crate::Store;

/// RocksDB-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Read a collection counter. Missing counters read as 0.
    fn get_counter(&self, key: &[u8]) -> Result<u64> {
        let cf = self.cf(cf::META)?;
        let value = self
            .db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?;
        match value {
            Some(bytes) => {
                let bytes: [u8; 8] = bytes
                    .as_slice()
                    .try_into()
                    .map_err(|_| StoreError::Serialization("malformed counter".into()))?;
                Ok(u64::from_be_bytes(bytes))
            }
            None => Ok(0),
        }
    }

    /// Fetch a record by exact key from a column family.
    fn get_record<T: serde::de::DeserializeOwned>(
        &self,
        family: &str,
        key: &[u8],
    ) -> Result<Option<T>> {
        let cf = self.cf(family)?;
        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    /// Collect the keys of an index family under a prefix, in key order.
    fn scan_index_keys(&self, family: &str, prefix: &[u8]) -> Result<Vec<Vec<u8>>> {
        let cf = self.cf(family)?;
        let iter = self
            .db
            .iterator_cf(&cf, IteratorMode::From(prefix, rocksdb::Direction::Forward));

        let mut matched = Vec::new();
        for item in iter {
            let (key, _) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            if !key.starts_with(prefix) {
                break;
            }
            matched.push(key.to_vec());
        }
        Ok(matched)
    }

    /// Load a wallet, treating an absent record as an empty wallet.
    fn wallet_or_empty(&self, account_id: &AccountId) -> Result<Wallet> {
        Ok(self
            .get_record::<Wallet>(cf::WALLETS, &keys::wallet_key(account_id))?
            .unwrap_or_else(|| Wallet::new(account_id.clone())))
    }
}

impl Store for RocksStore {
    // =========================================================================
    // User Operations
    // =========================================================================

    fn put_user(&self, user: &User) -> Result<()> {
        let cf = self.cf(cf::USERS)?;
        let key = keys::user_key(&user.account_id);
        let value = Self::serialize(user)?;

        self.db
            .put_cf(&cf, key, value)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn get_user(&self, account_id: &AccountId) -> Result<Option<User>> {
        self.get_record(cf::USERS, &keys::user_key(account_id))
    }

    fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let cf = self.cf(cf::USERS)?;
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_, data) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            let user: User = Self::deserialize(&data)?;
            if user.username == username {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let cf = self.cf(cf::USERS)?;
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_, data) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            let user: User = Self::deserialize(&data)?;
            if user.email == email {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }

    // =========================================================================
    // Wallet Operations
    // =========================================================================

    fn get_wallet(&self, account_id: &AccountId) -> Result<Option<Wallet>> {
        self.get_record(cf::WALLETS, &keys::wallet_key(account_id))
    }

    fn credit_wallet(&self, account_id: &AccountId, amount: u128) -> Result<u128> {
        let cf = self.cf(cf::WALLETS)?;
        let mut wallet = self.wallet_or_empty(account_id)?;

        wallet.balance += amount;
        wallet.updated_at = chrono::Utc::now();

        let value = Self::serialize(&wallet)?;
        self.db
            .put_cf(&cf, keys::wallet_key(account_id), value)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::debug!(account = %account_id, amount, balance = wallet.balance, "wallet credited");
        Ok(wallet.balance)
    }

    // =========================================================================
    // Course Operations
    // =========================================================================

    fn insert_course(&self, new: NewCourse, mentor_id: AccountId) -> Result<Course> {
        let cf_courses = self.cf(cf::COURSES)?;
        let cf_meta = self.cf(cf::META)?;

        let next = self.get_counter(counter::COURSE_SEQ)?;
        let course = new.into_course(CourseId::new(next), mentor_id);
        let value = Self::serialize(&course)?;

        // Record and counter advance together: a failed insert never
        // consumes an id.
        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_courses, keys::course_key(course.id), &value);
        batch.put_cf(&cf_meta, counter::COURSE_SEQ, (next + 1).to_be_bytes());

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(course)
    }

    fn get_course(&self, course_id: CourseId) -> Result<Option<Course>> {
        self.get_record(cf::COURSES, &keys::course_key(course_id))
    }

    fn put_course(&self, course: &Course) -> Result<()> {
        let cf = self.cf(cf::COURSES)?;
        let key = keys::course_key(course.id);

        if self.get_course(course.id)?.is_none() {
            return Err(StoreError::NotFound);
        }

        let value = Self::serialize(course)?;
        self.db
            .put_cf(&cf, key, value)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn list_courses(&self) -> Result<Vec<Course>> {
        let cf = self.cf(cf::COURSES)?;
        let mut courses = Vec::new();
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_, data) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            courses.push(Self::deserialize(&data)?);
        }
        Ok(courses)
    }

    // =========================================================================
    // Module Operations
    // =========================================================================

    fn insert_module(&self, new: NewModule, course_id: CourseId) -> Result<Module> {
        let cf_modules = self.cf(cf::MODULES)?;
        let cf_index = self.cf(cf::MODULES_BY_COURSE)?;
        let cf_meta = self.cf(cf::META)?;

        let next = self.get_counter(counter::MODULE_SEQ)?;
        let module = new.into_module(ModuleId::new(next), course_id);
        let value = Self::serialize(&module)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_modules, keys::module_key(module.id), &value);
        batch.put_cf(&cf_index, keys::course_module_key(course_id, module.id), []);
        batch.put_cf(&cf_meta, counter::MODULE_SEQ, (next + 1).to_be_bytes());

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(module)
    }

    fn get_module(&self, module_id: ModuleId) -> Result<Option<Module>> {
        self.get_record(cf::MODULES, &keys::module_key(module_id))
    }

    fn list_modules_by_course(&self, course_id: CourseId) -> Result<Vec<Module>> {
        let prefix = keys::course_modules_prefix(course_id);
        let index_keys = self.scan_index_keys(cf::MODULES_BY_COURSE, &prefix)?;

        let mut modules = Vec::with_capacity(index_keys.len());
        for key in index_keys {
            let Some(module_id) = keys::module_id_from_course_key(&key) else {
                continue;
            };
            if let Some(module) = self.get_module(module_id)? {
                modules.push(module);
            }
        }
        Ok(modules)
    }

    // =========================================================================
    // Lesson Operations
    // =========================================================================

    fn insert_lesson(&self, new: NewLesson, module_id: ModuleId) -> Result<Lesson> {
        let cf_lessons = self.cf(cf::LESSONS)?;
        let cf_index = self.cf(cf::LESSONS_BY_MODULE)?;
        let cf_meta = self.cf(cf::META)?;

        let next = self.get_counter(counter::LESSON_SEQ)?;
        let lesson = new.into_lesson(LessonId::new(next), module_id);
        let value = Self::serialize(&lesson)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_lessons, keys::lesson_key(lesson.id), &value);
        batch.put_cf(&cf_index, keys::module_lesson_key(module_id, lesson.id), []);
        batch.put_cf(&cf_meta, counter::LESSON_SEQ, (next + 1).to_be_bytes());

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(lesson)
    }

    fn get_lesson(&self, lesson_id: LessonId) -> Result<Option<Lesson>> {
        self.get_record(cf::LESSONS, &keys::lesson_key(lesson_id))
    }

    fn list_lessons_by_module(&self, module_id: ModuleId) -> Result<Vec<Lesson>> {
        let prefix = keys::module_lessons_prefix(module_id);
        let index_keys = self.scan_index_keys(cf::LESSONS_BY_MODULE, &prefix)?;

        let mut lessons = Vec::with_capacity(index_keys.len());
        for key in index_keys {
            let Some(lesson_id) = keys::lesson_id_from_module_key(&key) else {
                continue;
            };
            if let Some(lesson) = self.get_lesson(lesson_id)? {
                lessons.push(lesson);
            }
        }
        Ok(lessons)
    }

    // =========================================================================
    // Enrollment Operations
    // =========================================================================

    fn get_enrollment(
        &self,
        course_id: CourseId,
        student_id: &AccountId,
    ) -> Result<Option<Enrollment>> {
        self.get_record(cf::ENROLLMENTS, &keys::enrollment_key(course_id, student_id))
    }

    fn list_enrollments_by_student(&self, student_id: &AccountId) -> Result<Vec<Enrollment>> {
        let prefix = keys::student_enrollments_prefix(student_id);
        let index_keys = self.scan_index_keys(cf::ENROLLMENTS_BY_STUDENT, &prefix)?;

        let mut enrollments = Vec::with_capacity(index_keys.len());
        for key in index_keys {
            let Some(course_id) = keys::course_id_from_student_key(&key) else {
                continue;
            };
            if let Some(enrollment) = self.get_enrollment(course_id, student_id)? {
                enrollments.push(enrollment);
            }
        }

        // Index keys sort by course id; the contract lists by enrollment order.
        enrollments.sort_by_key(|e| e.seq);
        Ok(enrollments)
    }

    fn list_enrollments_by_course(&self, course_id: CourseId) -> Result<Vec<Enrollment>> {
        let cf = self.cf(cf::ENROLLMENTS)?;
        let prefix = keys::course_enrollments_prefix(course_id);
        let iter = self
            .db
            .iterator_cf(&cf, IteratorMode::From(&prefix, rocksdb::Direction::Forward));

        let mut enrollments = Vec::new();
        for item in iter {
            let (key, data) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            if !key.starts_with(&prefix) {
                break;
            }
            enrollments.push(Self::deserialize(&data)?);
        }
        Ok(enrollments)
    }

    // =========================================================================
    // Compound Operations
    // =========================================================================

    fn settle_enrollment(
        &self,
        course: &Course,
        student_id: &AccountId,
        fee: u128,
        treasury: Option<&AccountId>,
        enrolled_at: u64,
    ) -> Result<Enrollment> {
        // Check for duplicate enrollment
        if self.get_enrollment(course.id, student_id)?.is_some() {
            return Err(StoreError::DuplicateEnrollment {
                student_id: student_id.to_string(),
                course_id: course.id.value(),
            });
        }

        let required = course.price + fee;

        // Check sufficient funds
        let mut payer = self.wallet_or_empty(student_id)?;
        if !payer.has_sufficient_funds(required) {
            return Err(StoreError::InsufficientFunds {
                balance: payer.balance,
                required,
            });
        }

        let now = chrono::Utc::now();
        payer.balance -= required;
        payer.updated_at = now;

        // Stage every touched wallet keyed by account so a payee aliasing
        // another payee (mentor acting as treasury) still nets correctly.
        fn credit(
            store: &RocksStore,
            wallets: &mut BTreeMap<Vec<u8>, Wallet>,
            account: &AccountId,
            amount: u128,
            now: chrono::DateTime<chrono::Utc>,
        ) -> Result<()> {
            let key = keys::wallet_key(account);
            if !wallets.contains_key(&key) {
                let loaded = store.wallet_or_empty(account)?;
                wallets.insert(key.clone(), loaded);
            }
            if let Some(wallet) = wallets.get_mut(&key) {
                wallet.balance += amount;
                wallet.updated_at = now;
            }
            Ok(())
        }

        let mut wallets: BTreeMap<Vec<u8>, Wallet> = BTreeMap::new();
        wallets.insert(keys::wallet_key(student_id), payer);

        credit(self, &mut wallets, &course.mentor_id, course.price, now)?;
        if fee > 0 {
            if let Some(treasury) = treasury {
                credit(self, &mut wallets, treasury, fee, now)?;
            }
        }

        let seq = self.get_counter(counter::ENROLLMENT_SEQ)?;
        let enrollment = Enrollment {
            seq,
            course_id: course.id,
            student_id: student_id.clone(),
            amount_paid: required,
            enrolled_at,
        };

        let cf_wallets = self.cf(cf::WALLETS)?;
        let cf_enrollments = self.cf(cf::ENROLLMENTS)?;
        let cf_index = self.cf(cf::ENROLLMENTS_BY_STUDENT)?;
        let cf_meta = self.cf(cf::META)?;

        let enrollment_value = Self::serialize(&enrollment)?;

        // Write atomically
        let mut batch = WriteBatch::default();
        for (key, wallet) in &wallets {
            batch.put_cf(&cf_wallets, key, Self::serialize(wallet)?);
        }
        batch.put_cf(
            &cf_enrollments,
            keys::enrollment_key(course.id, student_id),
            &enrollment_value,
        );
        batch.put_cf(
            &cf_index,
            keys::student_enrollment_key(student_id, course.id),
            [],
        );
        batch.put_cf(&cf_meta, counter::ENROLLMENT_SEQ, (seq + 1).to_be_bytes());

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::info!(
            course = course.id.value(),
            student = %student_id,
            mentor = %course.mentor_id,
            amount = required,
            "enrollment settled"
        );

        Ok(enrollment)
    }
}
