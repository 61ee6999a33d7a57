use std::sync::Arc;

use crate::application::ports::event_repository::EventRepository;
use crate::application::ports::faculty_repository::FacultyRepository;
use crate::application::ports::image_storage_port::ImageStoragePort;
use crate::bootstrap::config::Config;

/// Router state: immutable configuration plus the collaborator ports.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    event_repo: Arc<dyn EventRepository>,
    faculty_repo: Arc<dyn FacultyRepository>,
    image_storage: Arc<dyn ImageStoragePort>,
}

impl AppServices {
    pub fn new(
        event_repo: Arc<dyn EventRepository>,
        faculty_repo: Arc<dyn FacultyRepository>,
        image_storage: Arc<dyn ImageStoragePort>,
    ) -> Self {
        Self {
            event_repo,
            faculty_repo,
            image_storage,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn event_repo(&self) -> Arc<dyn EventRepository> {
        self.services.event_repo.clone()
    }

    pub fn faculty_repo(&self) -> Arc<dyn FacultyRepository> {
        self.services.faculty_repo.clone()
    }

    pub fn image_storage(&self) -> Arc<dyn ImageStoragePort> {
        self.services.image_storage.clone()
    }
}
