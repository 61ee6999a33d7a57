//! In-memory stand-ins for the record and image stores.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::event_repository::EventRepository;
use crate::application::ports::faculty_repository::FacultyRepository;
use crate::application::ports::image_storage_port::ImageStoragePort;
use crate::bootstrap::app_context::{AppContext, AppServices};
use crate::bootstrap::config::Config;
use crate::domain::events::event::{Event, NewEvent};
use crate::domain::faculty::member::{Faculty, FacultyChanges, NewFaculty};

/// Ordered record of collaborator calls shared between fakes.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries_matching(&self, needle: &str) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.contains(needle))
            .cloned()
            .collect()
    }
}

#[derive(Default)]
pub struct InMemoryEventRepository {
    rows: Mutex<Vec<Event>>,
    fail_deletes: AtomicBool,
    fail_reads: AtomicBool,
    log: CallLog,
}

impl InMemoryEventRepository {
    pub fn with_log(log: CallLog) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    /// Makes `list` and `get_by_id` fail with `db down`.
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn all(&self) -> Vec<Event> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list(&self) -> anyhow::Result<Vec<Event>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            anyhow::bail!("db down");
        }
        Ok(self.all())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Event>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            anyhow::bail!("db down");
        }
        Ok(self.all().into_iter().find(|e| e.id == id))
    }

    async fn create(&self, event: &NewEvent) -> anyhow::Result<Event> {
        let row = Event {
            id: Uuid::new_v4(),
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date.clone(),
            category: event.category.clone(),
            image_url: event.image_url.clone(),
            created_at: chrono::Utc::now(),
        };
        self.log.push(format!("create_event {}", row.id));
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        self.log.push(format!("delete_event {id}"));
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Ok(false);
        }
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok(rows.len() != before)
    }
}

#[derive(Default)]
pub struct InMemoryFacultyRepository {
    rows: Mutex<Vec<Faculty>>,
    fail_reads: AtomicBool,
    log: CallLog,
}

impl InMemoryFacultyRepository {
    pub fn with_log(log: CallLog) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn all(&self) -> Vec<Faculty> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl FacultyRepository for InMemoryFacultyRepository {
    async fn list(&self) -> anyhow::Result<Vec<Faculty>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            anyhow::bail!("db down");
        }
        Ok(self.all())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<Faculty>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            anyhow::bail!("db down");
        }
        Ok(self.all().into_iter().find(|f| f.id == id))
    }

    async fn create(&self, member: &NewFaculty) -> anyhow::Result<Faculty> {
        let row = Faculty {
            id: Uuid::new_v4(),
            name: member.name.clone(),
            designation: member.designation.clone(),
            department: member.department.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
            specialization: member.specialization.clone(),
            image_url: member.image_url.clone(),
            created_at: chrono::Utc::now(),
        };
        self.log.push(format!("create_faculty {}", row.id));
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: Uuid, changes: &FacultyChanges) -> anyhow::Result<Option<Faculty>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|f| f.id == id) else {
            return Ok(None);
        };
        let apply = |slot: &mut String, value: &Option<String>| {
            if let Some(v) = value {
                *slot = v.clone();
            }
        };
        apply(&mut row.name, &changes.name);
        apply(&mut row.designation, &changes.designation);
        apply(&mut row.department, &changes.department);
        apply(&mut row.email, &changes.email);
        apply(&mut row.phone, &changes.phone);
        apply(&mut row.specialization, &changes.specialization);
        if changes.image_url.is_some() {
            row.image_url = changes.image_url.clone();
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        self.log.push(format!("delete_faculty {id}"));
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|f| f.id != id);
        Ok(rows.len() != before)
    }
}

#[derive(Default)]
pub struct InMemoryImageStorage {
    urls: Mutex<Vec<String>>,
    fail_uploads: AtomicBool,
    fail_deletes: AtomicBool,
    log: CallLog,
}

impl InMemoryImageStorage {
    pub fn with_log(log: CallLog) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    pub fn fail_uploads(&self) {
        self.fail_uploads.store(true, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    pub fn stored_urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStoragePort for InMemoryImageStorage {
    async fn upload_image(&self, _bytes: &[u8], filename: &str) -> anyhow::Result<String> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            anyhow::bail!("storage unavailable");
        }
        let url = format!("mem://images/{}-{}", Uuid::new_v4(), filename);
        self.log.push(format!("upload_image {url}"));
        self.urls.lock().unwrap().push(url.clone());
        Ok(url)
    }

    async fn delete_image(&self, url: &str) -> anyhow::Result<()> {
        self.log.push(format!("delete_image {url}"));
        if self.fail_deletes.load(Ordering::SeqCst) {
            anyhow::bail!("object store unreachable");
        }
        self.urls.lock().unwrap().retain(|u| u != url);
        Ok(())
    }
}

pub struct TestApp {
    pub ctx: AppContext,
    pub events: Arc<InMemoryEventRepository>,
    pub faculty: Arc<InMemoryFacultyRepository>,
    pub images: Arc<InMemoryImageStorage>,
    pub log: CallLog,
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "SECRET_KEY" => Some("test-secret-key-for-sessions".into()),
        "ADMIN_USERNAME" => Some("admin".into()),
        "ADMIN_PASSWORD" => Some("s3cret".into()),
        _ => None,
    })
    .expect("test config")
}

pub fn test_app() -> TestApp {
    let log = CallLog::default();
    let events = Arc::new(InMemoryEventRepository::with_log(log.clone()));
    let faculty = Arc::new(InMemoryFacultyRepository::with_log(log.clone()));
    let images = Arc::new(InMemoryImageStorage::with_log(log.clone()));
    let services = AppServices::new(events.clone(), faculty.clone(), images.clone());
    TestApp {
        ctx: AppContext::new(test_config(), services),
        events,
        faculty,
        images,
        log,
    }
}
