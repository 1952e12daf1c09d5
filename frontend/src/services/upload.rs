//! CSV upload to the analysis service.

use crate::services::api::AnalysisApi;
use crate::state::{Store, UploadState};
use crate::types::UploadRequest;

/// Upload one file and apply the outcome to `store`.
///
/// The uploading flag is raised before the request goes out and cleared by
/// the resolution of the newest upload, whatever its outcome. Returns `true`
/// when this upload's outcome was applied; `false` when it was superseded by
/// a newer upload or the view owning `store` is gone.
pub async fn upload_file<A, S>(api: &A, store: &S, request: UploadRequest<A::File>) -> bool
where
    A: AnalysisApi,
    S: Store<UploadState>,
{
    let file_name = request.file_name.clone();
    let Some(ticket) = store.with_mut(|upload| upload.begin_upload(file_name.as_str())) else {
        log::debug!("Upload view gone, not sending {}", file_name);
        return false;
    };

    log::info!("📤 Uploading {} for analysis", file_name);
    let outcome = api.analyze(request).await;
    match &outcome {
        Ok(results) => log::info!(
            "✅ Analysis complete: {} rows ({} positive, {} neutral, {} negative)",
            results.rows.len(),
            results.statistics.positive,
            results.statistics.neutral,
            results.statistics.negative,
        ),
        Err(e) => log::warn!("❌ Analysis of {} failed: {}", file_name, e),
    }

    let applied = store
        .with_mut(|upload| upload.finish_upload(ticket, outcome))
        .unwrap_or(false);
    if !applied {
        log::debug!("Discarded stale analysis result for {}", file_name);
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SessionState;
    use crate::types::{
        Credential, OperationFailure, OperationResult, ResultRow, ResultSet, Sentiment, Statistics,
    };
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    type Gate = oneshot::Receiver<OperationResult<ResultSet>>;

    /// Holds each analysis open until the test releases it.
    #[derive(Default)]
    struct GatedAnalysis {
        gates: RefCell<VecDeque<Gate>>,
        seen: RefCell<Vec<(String, Option<String>)>>,
    }

    impl GatedAnalysis {
        fn gate(&self) -> oneshot::Sender<OperationResult<ResultSet>> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().push_back(rx);
            tx
        }
    }

    impl AnalysisApi for GatedAnalysis {
        type File = Vec<u8>;

        async fn analyze(&self, request: UploadRequest<Vec<u8>>) -> OperationResult<ResultSet> {
            self.seen.borrow_mut().push((
                request.file_name.clone(),
                request.credential.as_ref().map(Credential::bearer_header),
            ));
            let gate = self.gates.borrow_mut().pop_front();
            match gate {
                Some(gate) => gate
                    .await
                    .unwrap_or_else(|_| Err(OperationFailure::transport("gate dropped"))),
                None => Err(OperationFailure::transport("no gate")),
            }
        }
    }

    fn result_set(text: &str) -> ResultSet {
        ResultSet {
            statistics: Statistics { positive: 0, neutral: 1, negative: 0 },
            rows: vec![ResultRow {
                id: None,
                text: text.into(),
                sentiment: Sentiment::Neutral,
                timestamp: "2024-05-01 10:00:00".into(),
            }],
        }
    }

    fn request(name: &str, credential: Option<Credential>) -> UploadRequest<Vec<u8>> {
        UploadRequest {
            file: b"feedback\nGreat\n".to_vec(),
            file_name: name.into(),
            credential,
        }
    }

    #[test]
    fn test_upload_applies_result() {
        let api = GatedAnalysis::default();
        let upload = Rc::new(RefCell::new(UploadState::default()));
        let release = api.gate();

        let applied = block_on(async {
            let pending = upload_file(&api, &upload, request("reviews.csv", Some(Credential::new("t"))));
            let check = async {
                assert!(upload.borrow().is_uploading());
                release.send(Ok(result_set("ok"))).unwrap();
            };
            futures::join!(pending, check).0
        });

        assert!(applied);
        assert!(!upload.borrow().is_uploading());
        assert_eq!(upload.borrow().results().unwrap().rows[0].text, "ok");
        assert_eq!(api.seen.borrow()[0].1.as_deref(), Some("Bearer t"));
    }

    #[test]
    fn test_non_csv_drop_is_forwarded_and_rejection_surfaces() {
        let api = GatedAnalysis::default();
        let upload = Rc::new(RefCell::new(UploadState::default()));
        api.gate()
            .send(Err(OperationFailure::rejected(
                400,
                Some("Error analyzing file: No feedback/review column found.".into()),
            )))
            .unwrap();

        block_on(upload_file(&api, &upload, request("notes.txt", Some(Credential::new("t")))));

        assert_eq!(api.seen.borrow().len(), 1);
        assert_eq!(api.seen.borrow()[0].0, "notes.txt");
        let state = upload.borrow();
        assert!(state.results().is_none());
        assert_eq!(
            state.error(),
            Some("Error analyzing file: No feedback/review column found.")
        );
        assert!(!state.is_uploading());
    }

    #[test]
    fn test_failed_upload_clears_stale_results() {
        let api = GatedAnalysis::default();
        let upload = Rc::new(RefCell::new(UploadState::default()));
        api.gate().send(Ok(result_set("first"))).unwrap();
        api.gate().send(Err(OperationFailure::transport("offline"))).unwrap();

        block_on(upload_file(&api, &upload, request("a.csv", None)));
        assert!(upload.borrow().results().is_some());
        block_on(upload_file(&api, &upload, request("a.csv", None)));

        assert!(upload.borrow().results().is_none());
        assert_eq!(upload.borrow().error(), Some("Error analyzing file"));
    }

    #[test]
    fn test_logout_during_upload_keeps_session_logged_out() {
        let api = GatedAnalysis::default();
        let upload = Rc::new(RefCell::new(UploadState::default()));
        let session = Rc::new(RefCell::new(SessionState::default()));
        {
            let mut state = session.borrow_mut();
            state.set_username("alice".into());
            state.set_password("pw".into());
            state.begin_submit();
            state.apply_login(Ok(Credential::new("tok")));
        }
        let release = api.gate();
        let credential = session.borrow().credential().cloned();

        block_on(async {
            let pending = upload_file(&api, &upload, request("a.csv", credential));
            let logout = async {
                session.borrow_mut().logout();
                release.send(Ok(result_set("late"))).unwrap();
            };
            futures::join!(pending, logout);
        });

        // Dispatched with the token current at issue time.
        assert_eq!(api.seen.borrow()[0].1.as_deref(), Some("Bearer tok"));
        assert!(session.borrow().credential().is_none());
        assert!(!session.borrow().is_authenticated());
    }

    #[test]
    fn test_overlapping_uploads_keep_newest() {
        let api = GatedAnalysis::default();
        let upload = Rc::new(RefCell::new(UploadState::default()));
        let release_old = api.gate();
        let release_new = api.gate();

        let (old_applied, new_applied, _) = block_on(async {
            futures::join!(
                upload_file(&api, &upload, request("old.csv", None)),
                upload_file(&api, &upload, request("new.csv", None)),
                async {
                    release_new.send(Ok(result_set("new"))).unwrap();
                    release_old.send(Ok(result_set("old"))).unwrap();
                }
            )
        });

        assert!(!old_applied);
        assert!(new_applied);
        assert_eq!(upload.borrow().results().unwrap().rows[0].text, "new");
        assert_eq!(upload.borrow().file_name(), Some("new.csv"));
        assert!(!upload.borrow().is_uploading());
    }

    #[test]
    fn test_result_after_unmount_is_ignored() {
        let api = GatedAnalysis::default();
        let owner = Rc::new(RefCell::new(UploadState::default()));
        let store = Rc::downgrade(&owner);
        let release = api.gate();

        let applied = block_on(async {
            let pending = upload_file(&api, &store, request("a.csv", None));
            let unmount = async {
                drop(owner);
                release.send(Ok(result_set("late"))).unwrap();
            };
            futures::join!(pending, unmount).0
        });

        assert!(!applied);
    }
}
