use super::*;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

const INDENT: &[u8] = b"    ";

pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling of the data file that a save writes into before renaming.
    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_tmp(&self, tmp: &Path, people: &[Person]) -> Result<(), AppError> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(tmp)?;
        let mut writer = BufWriter::new(file);

        let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
        people
            .serialize(&mut ser)
            .map_err(|e| AppError::Io(io::Error::other(e)))?;
        writer.write_all(b"\n")?;

        let file = writer.into_inner().map_err(|e| AppError::Io(e.into_error()))?;
        file.sync_all()?;
        Ok(())
    }
}

/// Flushes the directory entry left by a rename.
#[cfg(unix)]
fn sync_parent(path: &Path) -> Result<(), AppError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    File::open(parent)?.sync_all()?;
    Ok(())
}

#[cfg(not(unix))]
fn sync_parent(_path: &Path) -> Result<(), AppError> {
    Ok(())
}

impl PeopleStore for JsonStore {
    fn load(&self) -> Result<PeopleBook, AppError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = ?self.path, "no data file yet, starting empty");
                return Ok(PeopleBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let people: Vec<Person> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| AppError::corrupt(&self.path, e))?;

        debug!(path = ?self.path, count = people.len(), "loaded people");
        Ok(PeopleBook::from_people(people))
    }

    fn save(&self, people: &[Person]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let tmp = self.tmp_path();
        let written = self
            .write_tmp(&tmp, people)
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(AppError::from))
            .and_then(|()| sync_parent(&self.path));

        if let Err(e) = written {
            if let Err(rm) = fs::remove_file(&tmp)
                && rm.kind() != io::ErrorKind::NotFound
            {
                warn!(path = ?tmp, error = %rm, "could not remove temporary file");
            }
            return Err(e);
        }

        info!(path = ?self.path(), count = people.len(), "saved people");
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::parse_date;
    use tempfile::tempdir;

    fn person(surname: &str, first_name: &str, phone: &str, birthdate: &str) -> Person {
        Person::new(
            surname.to_string(),
            first_name.to_string(),
            phone.to_string(),
            parse_date(birthdate).unwrap(),
        )
    }

    #[test]
    fn missing_file_loads_empty() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = JsonStore::new(dir.path().join("nobody.json"));

        let book = store.load()?;

        assert!(book.is_empty());
        assert!(!store.exists(), "load must not create the file");
        Ok(())
    }

    #[test]
    fn json_store_is_persistent() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = JsonStore::new(dir.path().join("people.json"));

        // Deliberately not surname-ordered: load keeps file order
        let people = vec![
            person("Иванов", "Пётр", "+7 (900) 123-45-67", "15.03.1990"),
            person("Andreev", "Ivan", "555-5678", "01.01.1985"),
            person("Andreev", "Ivan", "555-5678", "01.01.1985"),
        ];

        store.save(&people)?;
        let loaded = store.load()?;

        assert_eq!(loaded.people(), people.as_slice());
        Ok(())
    }

    #[test]
    fn saved_file_is_readable_json() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("people.json");
        let store = JsonStore::new(&path);

        store.save(&[person("Иванов", "Пётр", "555-1234", "05.07.1990")])?;

        let text = fs::read_to_string(&path)?;
        assert_eq!(
            text,
            "[\n    {\n        \"фамилия\": \"Иванов\",\n        \"имя\": \"Пётр\",\n        \
            \"номер телефона\": \"555-1234\",\n        \"дата рождения\": \"05.07.1990\"\n    }\n]\n"
        );
        assert!(!store.tmp_path().exists());
        Ok(())
    }

    #[test]
    fn save_overwrites_in_full() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = JsonStore::new(dir.path().join("people.json"));

        store.save(&[
            person("A", "a", "1", "01.01.2000"),
            person("B", "b", "2", "02.02.2000"),
        ])?;
        store.save(&[person("C", "c", "3", "03.03.2000")])?;

        let loaded = store.load()?;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.people()[0].surname, "C");
        Ok(())
    }

    #[test]
    fn save_creates_missing_parent() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = JsonStore::new(dir.path().join("nested").join("deeper").join("p.json"));

        store.save(&[])?;

        assert!(store.exists());
        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn reads_files_written_with_two_space_indent() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("people.json");
        fs::write(
            &path,
            r#"[
  {"фамилия": "Петров", "имя": "Олег", "номер телефона": "1", "дата рождения": "20.01.2001"}
]"#,
        )?;

        let book = JsonStore::new(&path).load()?;

        assert_eq!(book.people()[0].first_name, "Олег");
        Ok(())
    }

    #[test]
    fn malformed_json_is_corrupt() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("people.json");

        let extra_key = r#"[{"фамилия": "A", "имя": "a", "номер телефона": "1",
            "дата рождения": "01.01.2000", "email": "z@example.com"}]"#;

        for content in ["", "   ", "{", "{}", "[1, 2]", r#"[{"фамилия": "A"}]"#, extra_key] {
            fs::write(&path, content)?;
            assert!(
                matches!(JsonStore::new(&path).load(), Err(AppError::CorruptData { .. })),
                "{content:?} should be corrupt"
            );
        }
        Ok(())
    }

    #[test]
    fn bad_date_in_file_is_corrupt_not_skipped() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("people.json");
        fs::write(
            &path,
            r#"[
    {"фамилия": "A", "имя": "a", "номер телефона": "1", "дата рождения": "01.01.2000"},
    {"фамилия": "B", "имя": "b", "номер телефона": "2", "дата рождения": "31.02.2000"}
]"#,
        )?;

        let err = JsonStore::new(&path).load().unwrap_err();

        assert!(matches!(err, AppError::CorruptData { .. }));
        assert!(err.to_string().contains("31.02.2000"));
        Ok(())
    }

    #[test]
    fn sync_parent_handles_bare_file_name() -> Result<(), AppError> {
        let dir = tempdir()?;

        sync_parent(Path::new("people.json"))?;
        sync_parent(&dir.path().join("people.json"))?;
        Ok(())
    }
}
