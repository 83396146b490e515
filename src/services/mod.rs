pub mod folder_service;
