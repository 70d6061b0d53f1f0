//! In-memory `LabelClient` used by the unit tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Mutex,
};

use async_trait::async_trait;
use github_client::{Error, Label, LabelClient};

/// A call received by [`FakeLabelClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(Label),
    Update(Label),
    Delete(String),
}

/// Keeps the remote labels in memory and applies every successful call to them.
#[derive(Default)]
pub struct FakeLabelClient {
    labels: Mutex<BTreeMap<String, Label>>,
    calls: Mutex<Vec<Call>>,
    failing: BTreeSet<String>,
    fail_list: bool,
}

impl FakeLabelClient {
    pub fn with_labels(labels: Vec<Label>) -> Self {
        Self {
            labels: Mutex::new(labels.into_iter().map(|l| (l.name.clone(), l)).collect()),
            ..Default::default()
        }
    }

    /// Makes every operation on `name` fail with a 422.
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Makes listing fail with a 404.
    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls that change labels, without the list call.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::List))
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn labels(&self) -> Vec<Label> {
        self.labels.lock().unwrap().values().cloned().collect()
    }

    fn check(&self, name: &str) -> Result<(), Error> {
        if self.failing.contains(name) {
            return Err(Error::ApiError {
                status: 422,
                message: "Validation Failed".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl LabelClient for FakeLabelClient {
    async fn list_repository_labels(&self, _owner: &str, _repo: &str) -> Result<Vec<Label>, Error> {
        self.calls.lock().unwrap().push(Call::List);
        if self.fail_list {
            return Err(Error::NotFound);
        }
        Ok(self.labels())
    }

    async fn create_label(&self, _owner: &str, _repo: &str, label: &Label) -> Result<(), Error> {
        self.calls.lock().unwrap().push(Call::Create(label.clone()));
        self.check(&label.name)?;
        self.labels
            .lock()
            .unwrap()
            .insert(label.name.clone(), label.clone());
        Ok(())
    }

    async fn update_label(&self, _owner: &str, _repo: &str, label: &Label) -> Result<(), Error> {
        self.calls.lock().unwrap().push(Call::Update(label.clone()));
        self.check(&label.name)?;
        let mut labels = self.labels.lock().unwrap();
        match labels.get_mut(&label.name) {
            Some(existing) => {
                *existing = label.clone();
                Ok(())
            }
            None => Err(Error::NotFound),
        }
    }

    async fn delete_label(&self, _owner: &str, _repo: &str, name: &str) -> Result<(), Error> {
        self.calls.lock().unwrap().push(Call::Delete(name.to_string()));
        self.check(name)?;
        match self.labels.lock().unwrap().remove(name) {
            Some(_) => Ok(()),
            None => Err(Error::NotFound),
        }
    }
}
