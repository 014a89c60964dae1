//! Integration tests for the pipeline module.

use std::cell::RefCell;
use std::io::Write;

use tempfile::NamedTempFile;

use csvix_cli::pipeline::{LoadPlan, ingest, provision_and_load};
use csvix_ingest::{extract_documents, infer_field_mapping};
use csvix_model::{FieldType, IndexSchema, IndexSettings};
use csvix_search::{BulkOptions, BulkResponse, ProvisionOutcome, SearchBackend};

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

/// In-memory engine double: tracks existence and stored document count.
#[derive(Default)]
struct FakeBackend {
    exists: RefCell<bool>,
    stored: RefCell<u64>,
    bodies: RefCell<Vec<String>>,
}

impl SearchBackend for FakeBackend {
    fn index_exists(&self, _index: &str) -> csvix_search::Result<bool> {
        Ok(*self.exists.borrow())
    }

    fn delete_index(&self, _index: &str) -> csvix_search::Result<()> {
        *self.exists.borrow_mut() = false;
        *self.stored.borrow_mut() = 0;
        Ok(())
    }

    fn create_index(&self, _index: &str, _schema: &IndexSchema) -> csvix_search::Result<()> {
        *self.exists.borrow_mut() = true;
        Ok(())
    }

    fn bulk(&self, _index: &str, body: String) -> csvix_search::Result<BulkResponse> {
        *self.stored.borrow_mut() += (body.lines().count() / 2) as u64;
        self.bodies.borrow_mut().push(body);
        Ok(BulkResponse {
            took: 1,
            errors: false,
            items: Vec::new(),
        })
    }

    fn refresh(&self, _index: &str) -> csvix_search::Result<()> {
        Ok(())
    }

    fn count(&self, _index: &str) -> csvix_search::Result<u64> {
        Ok(*self.stored.borrow())
    }
}

#[test]
fn full_load_against_fake_backend() {
    let file = create_temp_csv(
        "id,name,ts\n\
         1,a,2024-01-01\n\
         2,b,2024-01-02\n\
         3,,bad-date\n",
    );

    let result = ingest(file.path(), Some("ts")).expect("ingest");
    assert_eq!(result.rows, 3);
    assert!(result.time_normalized);

    let schema = infer_field_mapping(&result.frame, Some("ts"), IndexSettings::default());
    assert_eq!(schema.field("id"), Some(&FieldType::Long));
    assert_eq!(
        schema.field("name"),
        Some(&FieldType::Text { ignore_above: 256 })
    );
    assert_eq!(schema.field("ts"), Some(&FieldType::Date));

    let documents = extract_documents(&result.frame);
    let backend = FakeBackend::default();
    let bulk = BulkOptions::default().with_batch_size(2);
    let plan = LoadPlan {
        index: "people",
        schema: &schema,
        recreate: false,
        bulk: &bulk,
    };

    let outcome = provision_and_load(&backend, &plan, &documents).expect("load");
    assert_eq!(outcome.provision, ProvisionOutcome::Created);
    assert_eq!(outcome.bulk.documents, 3);
    assert_eq!(outcome.bulk.batches, 2);
    assert_eq!(outcome.indexed_count, 3);

    // Batch bodies: 2 documents then 1, each as an action/source line pair.
    let bodies = backend.bodies.borrow();
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0].lines().count(), 4);
    assert_eq!(bodies[1].lines().count(), 2);
    // The unparseable timestamp went in as null.
    assert!(bodies[1].contains("\"ts\":null"));
}

#[test]
fn recreate_resets_previous_documents() {
    let file = create_temp_csv("id\n1\n2\n");
    let result = ingest(file.path(), None).expect("ingest");
    let schema = infer_field_mapping(&result.frame, None, IndexSettings::default());
    let documents = extract_documents(&result.frame);

    let backend = FakeBackend::default();
    let bulk = BulkOptions::default();

    for run in 0..2 {
        let plan = LoadPlan {
            index: "people",
            schema: &schema,
            recreate: true,
            bulk: &bulk,
        };
        let outcome = provision_and_load(&backend, &plan, &documents).expect("load");
        assert_eq!(outcome.indexed_count, 2, "run {run}");
    }
}

#[test]
fn missing_input_fails_before_any_remote_call() {
    let error = ingest(std::path::Path::new("/no/such/file.csv"), None).unwrap_err();
    assert!(error.to_string().contains("/no/such/file.csv"));
}
