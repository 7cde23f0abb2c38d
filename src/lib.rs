mod alert;
mod config;
mod error;
mod medicine;
mod projector;
mod registry;
mod scheduler;
mod storage;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use medicine::Medicine;
use registry::Registry;

pub struct AppState {
    pub registry: Mutex<Registry>,
}

impl AppState {
    /// Lock the registry, recovering from poison if needed
    pub(crate) fn lock_registry(&self) -> std::sync::MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[tauri::command]
fn get_medicines(state: tauri::State<AppState>) -> Result<Vec<Medicine>, String> {
    Ok(state.lock_registry().medicines().to_vec())
}

#[tauri::command]
fn get_medicine_lines(state: tauri::State<AppState>) -> Result<Vec<String>, String> {
    Ok(state.lock_registry().display_lines())
}

#[tauri::command]
fn get_upcoming_lines(state: tauri::State<AppState>) -> Result<Vec<String>, String> {
    let registry = state.lock_registry();
    Ok(projector::upcoming_lines(
        registry.medicines(),
        chrono::Local::now().naive_local(),
    ))
}

#[tauri::command]
fn select_medicine(state: tauri::State<AppState>, index: usize) -> Result<Medicine, String> {
    state
        .lock_registry()
        .get(index)
        .ok_or_else(|| error::AppError::no_selection("no medicine at the selected position").into())
}

#[tauri::command]
fn add_medicine(
    app: tauri::AppHandle,
    state: tauri::State<AppState>,
    name: String,
    time: String,
    repeat: bool,
) -> Result<Medicine, String> {
    let mut registry = state.lock_registry();
    let added = registry.add(&name, &time, repeat)?;
    projector::emit_upcoming(&app, registry.medicines());
    Ok(added)
}

#[tauri::command]
fn edit_medicine(
    app: tauri::AppHandle,
    state: tauri::State<AppState>,
    index: Option<usize>,
    name: String,
    time: String,
    repeat: bool,
) -> Result<Medicine, String> {
    let mut registry = state.lock_registry();
    let edited = registry.edit(index, &name, &time, repeat)?;
    projector::emit_upcoming(&app, registry.medicines());
    Ok(edited)
}

#[tauri::command]
fn delete_medicine(
    app: tauri::AppHandle,
    state: tauri::State<AppState>,
    index: Option<usize>,
) -> Result<(), String> {
    let mut registry = state.lock_registry();
    registry.delete(index)?;
    projector::emit_upcoming(&app, registry.medicines());
    Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let registry = Registry::new().expect("Failed to initialize medicine registry");

    // Both background loops stop when this flag is set on exit.
    let shutdown = Arc::new(AtomicBool::new(false));
    let scheduler_shutdown = shutdown.clone();
    let projector_shutdown = shutdown.clone();

    tauri::Builder::default()
        .plugin(tauri_plugin_notification::init())
        .manage(AppState {
            registry: Mutex::new(registry),
        })
        .setup(move |app| {
            let handle = app.handle().clone();
            std::thread::spawn(move || scheduler::run(handle, scheduler_shutdown));

            let handle = app.handle().clone();
            std::thread::spawn(move || projector::run(handle, projector_shutdown));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_medicines,
            get_medicine_lines,
            get_upcoming_lines,
            select_medicine,
            add_medicine,
            edit_medicine,
            delete_medicine,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(move |_app, event| {
            if let tauri::RunEvent::Exit = event {
                shutdown.store(true, Ordering::Relaxed);
            }
        });
}
