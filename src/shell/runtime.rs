//! Async driver for the shell
//!
//! Executes the shell's commands on the current `LocalSet`: each body load
//! runs as a local task and reports back through a channel as an
//! [`Event::BodyResolved`]. A load for an instance that has been unmounted is
//! aborted; if its result still arrives the shell discards it.
//!
//! Every load ends in a result. A loader that panics or outlives the body
//! timeout reports as [`BodyState::Failed`] so the page never waits forever.

use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::{AbortHandle, JoinHandle};

use super::{Command, Event, Shell};
use crate::content::{BodyState, ContentRegistry};
use crate::transition::InstanceId;
use crate::ContentError;

/// Upper bound on frames [`Runtime::settle`] will drive
const MAX_SETTLE_STEPS: usize = 10_000;

pub struct Runtime {
    shell: Shell,
    frame: Duration,
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
    loads: HashMap<InstanceId, Load>,
}

/// A body load in flight
///
/// `task` reports the result; `body` is the loader it watches.
struct Load {
    task: JoinHandle<()>,
    body: AbortHandle,
}

impl Load {
    fn spawn(
        registry: Rc<ContentRegistry>,
        slug: String,
        limit: Duration,
        instance: InstanceId,
        tx: UnboundedSender<Event>,
    ) -> Self {
        let body = tokio::task::spawn_local(async move {
            match tokio::time::timeout(limit, registry.get_post_body(&slug)).await {
                Ok(state) => state,
                Err(_) => {
                    tracing::warn!("body of {} not ready after {:?}", slug, limit);
                    BodyState::Failed(ContentError::TimedOut(limit))
                }
            }
        });
        let abort = body.abort_handle();

        let task = tokio::task::spawn_local(async move {
            let state = match body.await {
                Ok(state) => state,
                Err(e) if e.is_cancelled() => return,
                Err(e) => {
                    tracing::warn!("body loader for instance {} crashed: {}", instance, e);
                    BodyState::Failed(ContentError::Other("the loader crashed".to_string()))
                }
            };
            let _ = tx.send(Event::BodyResolved { instance, state });
        });

        Self { task, body: abort }
    }

    fn abort(&self) {
        self.body.abort();
        self.task.abort();
    }
}

impl Runtime {
    /// Wrap a shell; must be called from within a `LocalSet`
    pub fn new(shell: Shell, frame: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut runtime = Self {
            shell,
            frame,
            tx,
            rx,
            loads: HashMap::new(),
        };
        runtime.execute();
        runtime
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Number of body loads in flight
    pub fn pending_loads(&self) -> usize {
        self.loads.len()
    }

    /// Feed an event to the shell and run whatever it asks for
    pub fn dispatch(&mut self, event: Event) {
        if let Event::BodyResolved { instance, .. } = &event {
            self.loads.remove(instance);
        }
        self.shell.handle(event);
        self.execute();
    }

    /// Next event produced by a background task
    pub async fn recv(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Drive frames and loads until the shell is idle
    pub async fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_STEPS {
            while let Ok(event) = self.rx.try_recv() {
                self.dispatch(event);
            }

            if self.shell.is_animating() {
                self.dispatch(Event::Frame(self.frame));
                tokio::task::yield_now().await;
                continue;
            }

            // A finished task still in the map died before reporting
            let dead: Vec<InstanceId> = self
                .loads
                .iter()
                .filter(|(_, load)| load.task.is_finished())
                .map(|(instance, _)| *instance)
                .collect();
            for instance in dead {
                tracing::warn!("body load for instance {} ended without a result", instance);
                self.dispatch(Event::BodyResolved {
                    instance,
                    state: BodyState::Failed(ContentError::Other(
                        "the loader stopped without an answer".to_string(),
                    )),
                });
            }
            if self.shell.is_animating() {
                continue;
            }
            if self.loads.is_empty() {
                return;
            }

            if let Some(event) = self.rx.recv().await {
                self.dispatch(event);
            }
        }
        tracing::warn!("shell still busy after {} steps", MAX_SETTLE_STEPS);
    }

    fn execute(&mut self) {
        for command in self.shell.drain_commands() {
            match command {
                Command::LoadBody { instance, slug } => {
                    tracing::debug!("loading body of {} for instance {}", slug, instance);
                    let load = Load::spawn(
                        self.shell.registry().clone(),
                        slug,
                        self.shell.config().body_timeout(),
                        instance,
                        self.tx.clone(),
                    );
                    if let Some(previous) = self.loads.insert(instance, load) {
                        previous.abort();
                    }
                }
                Command::CancelBody { instance } => {
                    if let Some(load) = self.loads.remove(&instance) {
                        tracing::debug!("cancelling body load for instance {}", instance);
                        load.abort();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{body, ContentRegistry, PostMeta};
    use crate::helpers::parse_iso_date;
    use crate::router::MemoryHistory;
    use crate::transition::Phase;
    use tokio::task::LocalSet;

    fn runtime(registry: ContentRegistry, path: &str) -> Runtime {
        runtime_with(SiteConfig::default(), registry, path)
    }

    fn runtime_with(config: SiteConfig, registry: ContentRegistry, path: &str) -> Runtime {
        let shell = Shell::new(
            Rc::new(config),
            Rc::new(registry),
            Box::new(MemoryHistory::new(path)),
        );
        Runtime::new(shell, Duration::from_millis(16))
    }

    fn explode() -> Result<String, ContentError> {
        panic!("markdown renderer fell over")
    }

    fn meta(slug: &str) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: parse_iso_date("2026-03-01").unwrap(),
            description: String::new(),
            tags: vec![],
        }
    }

    fn page_text(runtime: &Runtime) -> String {
        runtime.shell().render().text_content()
    }

    #[tokio::test]
    async fn test_post_body_loads_after_mount() {
        LocalSet::new()
            .run_until(async {
                let mut rt = runtime(ContentRegistry::builtin().unwrap(), "/blog");
                rt.settle().await;
                assert_eq!(rt.pending_loads(), 0);

                rt.dispatch(Event::Navigate("/blog/building-this-site-with-claude".into()));
                // The index is still exiting; nothing is loading yet
                assert_eq!(rt.pending_loads(), 0);

                rt.settle().await;
                assert_eq!(rt.pending_loads(), 0);
                assert_eq!(rt.shell().phase(), Some(Phase::Settled));
                assert!(rt.shell().is_idle());
                let text = page_text(&rt);
                assert!(text.contains("February 18, 2026"));
                // Title plus the last line of the markdown body
                assert!(text.contains("More coming soon."));
                assert!(rt.shell().faults().is_empty());
            })
            .await;
    }

    #[tokio::test]
    async fn test_failed_load_surfaces_error() {
        LocalSet::new()
            .run_until(async {
                let registry = ContentRegistry::builder()
                    .post(meta("flaky"))
                    .body(
                        "flaky",
                        body::from_fn(|| async { Err(ContentError::Other("offline".into())) }),
                    )
                    .build()
                    .unwrap();
                let mut rt = runtime(registry, "/blog/flaky");
                rt.settle().await;
                assert!(page_text(&rt).contains("Couldn't load this post: offline"));
                assert_eq!(rt.shell().faults().len(), 1);
            })
            .await;
    }

    #[tokio::test]
    async fn test_load_cancelled_when_leaving() {
        LocalSet::new()
            .run_until(async {
                let registry = ContentRegistry::builder()
                    .post(meta("slow"))
                    .body(
                        "slow",
                        body::from_fn(|| async {
                            tokio::time::sleep(Duration::from_secs(3600)).await;
                            Ok("too late".to_string())
                        }),
                    )
                    .build()
                    .unwrap();
                let mut rt = runtime(registry, "/blog/slow");
                assert_eq!(rt.pending_loads(), 1);

                rt.dispatch(Event::Navigate("/about".into()));
                rt.settle().await;
                assert_eq!(rt.pending_loads(), 0);
                assert_eq!(rt.shell().current_key(), Some("/about"));
                assert!(!page_text(&rt).contains("too late"));
            })
            .await;
    }

    #[tokio::test]
    async fn test_stale_result_discarded() {
        LocalSet::new()
            .run_until(async {
                let mut rt = runtime(
                    ContentRegistry::builtin().unwrap(),
                    "/blog/building-this-site-with-claude",
                );
                rt.dispatch(Event::Navigate("/about".into()));
                // Deliver a result for the first instance after it is gone
                rt.settle().await;
                rt.dispatch(Event::BodyResolved {
                    instance: 1,
                    state: crate::content::BodyState::NotFound,
                });
                assert!(rt.shell().faults().is_empty());
                assert!(page_text(&rt).contains("a bit about me"));
            })
            .await;
    }

    #[tokio::test]
    async fn test_panicking_loader_surfaces_error() {
        LocalSet::new()
            .run_until(async {
                let registry = ContentRegistry::builder()
                    .post(meta("boom"))
                    .body("boom", body::from_fn(|| async { explode() }))
                    .build()
                    .unwrap();
                let mut rt = runtime(registry, "/blog/boom");
                assert_eq!(rt.pending_loads(), 1);

                rt.settle().await;
                assert_eq!(rt.pending_loads(), 0);
                assert!(rt.shell().is_idle());
                assert!(!rt.shell().is_loading());
                assert!(page_text(&rt).contains("Couldn't load this post: the loader crashed"));
                assert_eq!(rt.shell().faults().len(), 1);
            })
            .await;
    }

    #[tokio::test]
    async fn test_stalled_loader_times_out() {
        LocalSet::new()
            .run_until(async {
                let registry = ContentRegistry::builder()
                    .post(meta("stuck"))
                    .body(
                        "stuck",
                        body::from_fn(std::future::pending::<Result<String, ContentError>>),
                    )
                    .build()
                    .unwrap();
                let config = SiteConfig {
                    body_timeout_ms: 50,
                    ..SiteConfig::default()
                };
                let mut rt = runtime_with(config, registry, "/blog/stuck");

                rt.settle().await;
                assert_eq!(rt.pending_loads(), 0);
                assert!(rt.shell().is_idle());
                assert!(page_text(&rt).contains("Couldn't load this post: no answer after 50ms"));
                assert_eq!(rt.shell().faults().len(), 1);
            })
            .await;
    }

    #[tokio::test]
    async fn test_cancelled_load_reports_nothing() {
        LocalSet::new()
            .run_until(async {
                let registry = ContentRegistry::builder()
                    .post(meta("slow"))
                    .body(
                        "slow",
                        body::from_fn(|| async {
                            tokio::time::sleep(Duration::from_secs(3600)).await;
                            Ok("too late".to_string())
                        }),
                    )
                    .build()
                    .unwrap();
                let mut rt = runtime(registry, "/blog/slow");
                rt.dispatch(Event::Navigate("/about".into()));
                rt.settle().await;
                tokio::task::yield_now().await;
                // An aborted loader is not a crash
                assert!(rt.rx.try_recv().is_err());
                assert!(rt.shell().faults().is_empty());
            })
            .await;
    }
}
