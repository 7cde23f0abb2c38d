use std::fs;
use std::path::PathBuf;

use crate::config::APP_DATA_DIR;
use crate::error::{AppError, AppResult};
use crate::medicine::Medicine;
use crate::storage;

/// In-memory ordered list of medicines backed by the persisted JSON file.
///
/// Display order is insertion/load order and selection is by positional
/// index into this sequence. Every mutation re-saves the full list.
pub struct Registry {
    medicines: Vec<Medicine>,
    app_data_path: PathBuf,
}

impl Registry {
    pub fn new() -> AppResult<Self> {
        let app_data_path = dirs::data_local_dir()
            .ok_or_else(|| AppError::storage("failed to get local data dir"))?
            .join(APP_DATA_DIR);

        fs::create_dir_all(&app_data_path).map_err(|e| AppError::storage(e.to_string()))?;

        let medicines = storage::load_local(&app_data_path)?;
        eprintln!(
            "Loaded {} medicines from {}",
            medicines.len(),
            app_data_path.display()
        );

        Ok(Self {
            medicines,
            app_data_path,
        })
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn display_lines(&self) -> Vec<String> {
        self.medicines.iter().map(|m| m.display_line()).collect()
    }

    /// Pure read used to populate the edit fields from a selection
    pub fn get(&self, index: usize) -> Option<Medicine> {
        self.medicines.get(index).cloned()
    }

    pub fn app_data_path(&self) -> &std::path::Path {
        &self.app_data_path
    }

    /// Validate, append and persist a new medicine
    pub fn add(&mut self, name: &str, time_str: &str, repeat: bool) -> AppResult<Medicine> {
        let medicine = Self::build(name, time_str, repeat)?;
        self.medicines.push(medicine.clone());
        self.save()?;
        Ok(medicine)
    }

    /// Replace the medicine at the selected index in place, preserving order
    pub fn edit(
        &mut self,
        index: Option<usize>,
        name: &str,
        time_str: &str,
        repeat: bool,
    ) -> AppResult<Medicine> {
        let index = self.selected(index, "edit")?;
        let medicine = Self::build(name, time_str, repeat)?;
        self.medicines[index] = medicine.clone();
        self.save()?;
        Ok(medicine)
    }

    /// Remove the medicine at the selected index
    pub fn delete(&mut self, index: Option<usize>) -> AppResult<()> {
        let index = self.selected(index, "delete")?;
        self.medicines.remove(index);
        self.save()?;
        Ok(())
    }

    fn build(name: &str, time_str: &str, repeat: bool) -> AppResult<Medicine> {
        if name.is_empty() || time_str.is_empty() {
            return Err(AppError::validation(
                "please enter both medicine name and time",
            ));
        }
        let time = Medicine::parse_time(time_str)?;
        Ok(Medicine {
            name: name.to_string(),
            time,
            repeat,
        })
    }

    // A stale index (registry mutated since the selection was made) is
    // treated the same as no selection at all.
    fn selected(&self, index: Option<usize>, action: &str) -> AppResult<usize> {
        match index {
            Some(i) if i < self.medicines.len() => Ok(i),
            _ => Err(AppError::no_selection(format!(
                "please select a medicine to {}",
                action
            ))),
        }
    }

    fn save(&self) -> AppResult<()> {
        storage::save_local(&self.app_data_path, &self.medicines)
    }
}
