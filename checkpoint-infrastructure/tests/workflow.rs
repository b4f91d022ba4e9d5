use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use checkpoint_application::commands::{
    evaluate_item, link_item_to_student, register_item, register_student, release_item,
    remove_item, remove_student, review_queue, unlink_item_from_student, update_student_status,
};
use checkpoint_application::queries::{
    decisions_for_item, evaluation_queue, get_item, items_by_brand, items_by_category,
    processed_count, recent_decisions, students_by_course, students_with_violations,
};
use checkpoint_application::{AppError, AppState};
use checkpoint_domain::{
    ConsumptionContext, Decision, IntakeItem, IntakeStudent, Item, ItemFunction, ItemId,
    ItemRepository, ItemStatus, PrimaryCategory, Replaceability, RuntimeConfig, SecondaryCategory,
    Student, StudentId, StudentRepository, StudentStatus, ThreatLevel, UsageType,
};
use checkpoint_infrastructure::{InMemoryItemRepository, InMemoryStudentRepository};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

fn state_with(config: RuntimeConfig, item_repo: Arc<dyn ItemRepository>) -> AppState {
    AppState::new(config, item_repo, Arc::new(InMemoryStudentRepository::new()))
}

fn state() -> AppState {
    state_with(
        RuntimeConfig::default(),
        Arc::new(InMemoryItemRepository::new()),
    )
}

fn intake_item(
    name: &str,
    primary: PrimaryCategory,
    secondary: SecondaryCategory,
    usage: UsageType,
    quantity: u32,
    holder: Option<&str>,
) -> IntakeItem {
    IntakeItem {
        name: name.to_string(),
        brand: None,
        primary_category: primary,
        secondary_category: secondary,
        function: ItemFunction::Container,
        context: ConsumptionContext::Beverage,
        usage_type: usage,
        replaceability: Replaceability::Low,
        quantity,
        holder: holder.map(str::to_string),
    }
}

fn reusable_bottle(holder: Option<&str>) -> IntakeItem {
    intake_item(
        "Water bottle",
        PrimaryCategory::SingleUsePlastic,
        SecondaryCategory::BeverageContainer,
        UsageType::Reusable,
        1,
        holder,
    )
}

fn enrolled(id: &str, course: &str) -> IntakeStudent {
    IntakeStudent {
        id: id.to_string(),
        name: "Ana Reyes".to_string(),
        course: course.to_string(),
        year: 2,
        status: StudentStatus::Enrolled,
        enrollment_date: None,
    }
}

#[tokio::test]
async fn allowed_item_is_released_after_evaluation() {
    let state = state();
    let id = register_item(&state, reusable_bottle(None)).await.unwrap();
    assert_eq!(evaluation_queue(&state).await.unwrap().len(), 1);

    let evaluation = evaluate_item(&state, id).await.unwrap();

    assert_eq!(evaluation.result.decision(), Decision::Allow);
    assert!(evaluation.released);
    assert_eq!(get_item(&state, id).await.unwrap().status(), ItemStatus::Released);
    assert!(evaluation_queue(&state).await.unwrap().is_empty());
    assert_eq!(processed_count(&state).await.unwrap(), 1);

    let snapshot = state.metrics.snapshot();
    assert_eq!(snapshot.evaluations, 1);
    assert_eq!(snapshot.allowed, 1);
    assert_eq!(snapshot.releases, 1);
}

#[tokio::test]
async fn auto_release_can_be_disabled() {
    let config = RuntimeConfig {
        auto_release_allowed: false,
        ..RuntimeConfig::default()
    };
    let state = state_with(config, Arc::new(InMemoryItemRepository::new()));
    let id = register_item(&state, reusable_bottle(None)).await.unwrap();

    let evaluation = evaluate_item(&state, id).await.unwrap();

    assert!(!evaluation.released);
    assert_eq!(get_item(&state, id).await.unwrap().status(), ItemStatus::Held);

    let released = release_item(&state, id).await.unwrap();
    assert_eq!(released.status(), ItemStatus::Released);
    assert_eq!(state.metrics.snapshot().releases, 1);
}

#[tokio::test]
async fn review_queue_handles_mixed_batch() {
    let state = state();
    register_student(&state, enrolled("2024-0001", "BSIT"))
        .await
        .unwrap();

    let gun = register_item(
        &state,
        intake_item(
            "Airsoft pistol",
            PrimaryCategory::Weapon,
            SecondaryCategory::Firearm,
            UsageType::Reusable,
            1,
            Some("2024-0001"),
        ),
    )
    .await
    .unwrap();
    let cups = register_item(
        &state,
        intake_item(
            "Plastic cups",
            PrimaryCategory::SingleUsePlastic,
            SecondaryCategory::BeverageContainer,
            UsageType::SingleUse,
            10,
            None,
        ),
    )
    .await
    .unwrap();
    let bottle = register_item(&state, reusable_bottle(None)).await.unwrap();

    let report = review_queue(&state).await.unwrap();

    assert!(report.failures.is_empty());
    let ids: Vec<ItemId> = report.evaluations.iter().map(|e| e.item_id).collect();
    assert_eq!(ids, vec![gun, cups, bottle]);
    assert_eq!(report.alerts().count(), 1);

    let gun_result = &report.evaluations[0].result;
    assert_eq!(gun_result.threat_level(), ThreatLevel::Critical);
    assert_eq!(gun_result.decision(), Decision::Disallow);
    // 12 + 30 + 4 + 14 + 8 + 7 + 18
    assert_eq!(report.evaluations[1].result.risk_score(), Some(93));

    let queue: Vec<ItemId> = evaluation_queue(&state)
        .await
        .unwrap()
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(queue, vec![gun, cups]);

    let violators = students_with_violations(&state).await.unwrap();
    assert_eq!(violators.len(), 1);
    assert_eq!(violators[0].item_ids(), &[gun]);

    let recent = recent_decisions(&state, Some(2)).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].item_id, bottle);
    assert_eq!(recent[1].item_id, cups);
    assert_eq!(decisions_for_item(&state, gun).await.unwrap().len(), 1);

    let snapshot = state.metrics.snapshot();
    assert_eq!(snapshot.evaluations, 3);
    assert_eq!(snapshot.disallowed, 2);
    assert_eq!(snapshot.alerts, 1);
}

#[tokio::test]
async fn decision_log_is_bounded() {
    let config = RuntimeConfig {
        decision_log_capacity: 2,
        auto_release_allowed: false,
        ..RuntimeConfig::default()
    };
    let state = state_with(config, Arc::new(InMemoryItemRepository::new()));
    let id = register_item(&state, reusable_bottle(None)).await.unwrap();
    for _ in 0..5 {
        evaluate_item(&state, id).await.unwrap();
    }
    assert_eq!(state.decision_log.read().await.len(), 2);
    assert_eq!(state.metrics.snapshot().evaluations, 5);
}

#[tokio::test]
async fn unknown_holder_is_a_bad_request() {
    let state = state();
    let err = register_item(&state, reusable_bottle(Some("ghost")))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(evaluation_queue(&state).await.unwrap().is_empty());
}

#[tokio::test]
async fn invalid_item_is_a_domain_error() {
    let state = state();
    let mut payload = reusable_bottle(None);
    payload.quantity = 0;
    let err = register_item(&state, payload).await.unwrap_err();
    assert!(matches!(err, AppError::Domain(_)));
}

#[tokio::test]
async fn missing_items_are_not_found() {
    let state = state();
    assert!(matches!(
        evaluate_item(&state, ItemId(42)).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        release_item(&state, ItemId(42)).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        remove_item(&state, ItemId(42)).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(state.metrics.snapshot().failures, 0);
}

#[tokio::test]
async fn student_lifecycle() {
    let state = state();
    let id = StudentId::new("2024-0002");
    register_student(&state, enrolled("2024-0002", "BSN"))
        .await
        .unwrap();
    assert!(matches!(
        register_student(&state, enrolled("2024-0002", "BSN")).await,
        Err(AppError::BadRequest(_))
    ));

    let suspended = update_student_status(&state, &id, StudentStatus::Suspended)
        .await
        .unwrap();
    assert!(suspended.is_suspended());
    assert!(matches!(
        update_student_status(&state, &id, StudentStatus::Outsider).await,
        Err(AppError::Domain(_))
    ));

    let item = register_item(&state, reusable_bottle(None)).await.unwrap();
    assert!(matches!(
        link_item_to_student(&state, &id, ItemId(9)).await,
        Err(AppError::NotFound(_))
    ));
    let linked = link_item_to_student(&state, &id, item).await.unwrap();
    assert_eq!(linked.violation_count(), 1);
    let unlinked = unlink_item_from_student(&state, &id, item).await.unwrap();
    assert!(!unlinked.has_violations());

    assert_eq!(students_by_course(&state, "bsn").await.unwrap().len(), 1);
    remove_student(&state, &id).await.unwrap();
    assert!(matches!(
        remove_student(&state, &id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn removing_item_unlinks_holder() {
    let state = state();
    register_student(&state, enrolled("2024-0003", "BSIT"))
        .await
        .unwrap();
    let mut payload = reusable_bottle(Some("2024-0003"));
    payload.brand = Some("Aqua".to_string());
    let item = register_item(&state, payload).await.unwrap();

    assert_eq!(items_by_brand(&state, "AQUA").await.unwrap().len(), 1);
    assert!(matches!(
        items_by_brand(&state, "  ").await,
        Err(AppError::BadRequest(_))
    ));
    assert_eq!(
        items_by_category(&state, PrimaryCategory::SingleUsePlastic)
            .await
            .unwrap()
            .len(),
        1
    );

    remove_item(&state, item).await.unwrap();
    assert!(students_with_violations(&state).await.unwrap().is_empty());
}

/// Wraps the in-memory log and fails lookups or status writes for one id.
struct FailingLookup {
    inner: InMemoryItemRepository,
    broken: ItemId,
    broken_release: bool,
}

#[async_trait]
impl ItemRepository for FailingLookup {
    async fn add(&self, item: Item) -> anyhow::Result<ItemId> {
        self.inner.add(item).await
    }
    async fn remove(&self, id: ItemId) -> anyhow::Result<Option<Item>> {
        self.inner.remove(id).await
    }
    async fn update_status(&self, id: ItemId, status: ItemStatus) -> anyhow::Result<Option<Item>> {
        if self.broken_release && id == self.broken {
            return Err(anyhow!("status write rejected"));
        }
        self.inner.update_status(id, status).await
    }
    async fn find_by_id(&self, id: ItemId) -> anyhow::Result<Option<Item>> {
        if !self.broken_release && id == self.broken {
            return Err(anyhow!("storage unavailable"));
        }
        self.inner.find_by_id(id).await
    }
    async fn list_with_ids(&self) -> anyhow::Result<Vec<(ItemId, Item)>> {
        self.inner.list_with_ids().await
    }
    async fn find_by_category(
        &self,
        category: PrimaryCategory,
    ) -> anyhow::Result<Vec<(ItemId, Item)>> {
        self.inner.find_by_category(category).await
    }
    async fn find_by_status(&self, status: ItemStatus) -> anyhow::Result<Vec<(ItemId, Item)>> {
        self.inner.find_by_status(status).await
    }
    async fn find_by_brand(&self, brand: &str) -> anyhow::Result<Vec<(ItemId, Item)>> {
        self.inner.find_by_brand(brand).await
    }
}

#[tokio::test]
async fn review_skips_failing_items() {
    let repo = Arc::new(FailingLookup {
        inner: InMemoryItemRepository::new(),
        broken: ItemId(2),
        broken_release: false,
    });
    let state = state_with(RuntimeConfig::default(), repo);
    for _ in 0..3 {
        register_item(&state, reusable_bottle(None)).await.unwrap();
    }

    let report = review_queue(&state).await.unwrap();

    assert_eq!(report.evaluations.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].item_id, ItemId(2));
    assert!(report.failures[0].error.contains("storage unavailable"));
    assert_eq!(state.metrics.snapshot().failures, 1);
}

#[tokio::test]
async fn failed_release_leaves_no_decision_behind() {
    let repo = Arc::new(FailingLookup {
        inner: InMemoryItemRepository::new(),
        broken: ItemId(1),
        broken_release: true,
    });
    let state = state_with(RuntimeConfig::default(), repo);
    let id = register_item(&state, reusable_bottle(None)).await.unwrap();

    let err = evaluate_item(&state, id).await.unwrap_err();
    assert!(matches!(err, AppError::Internal(_)));

    let metrics = state.metrics.snapshot();
    assert_eq!(metrics.evaluations, 0);
    assert_eq!(metrics.allowed, 0);
    assert_eq!(metrics.releases, 0);
    assert_eq!(metrics.failures, 1);
    assert!(recent_decisions(&state, None).await.unwrap().is_empty());
    assert_eq!(get_item(&state, id).await.unwrap().status(), ItemStatus::Held);
}

/// Student store whose records disappear between lookup and link.
#[derive(Default)]
struct VanishingHolders {
    inner: InMemoryStudentRepository,
}

#[async_trait]
impl StudentRepository for VanishingHolders {
    async fn add(&self, student: Student) -> anyhow::Result<()> {
        self.inner.add(student).await
    }
    async fn update(&self, student: Student) -> anyhow::Result<bool> {
        self.inner.update(student).await
    }
    async fn find(&self, id: &StudentId) -> anyhow::Result<Option<Student>> {
        self.inner.find(id).await
    }
    async fn list(&self) -> anyhow::Result<Vec<Student>> {
        self.inner.list().await
    }
    async fn find_by_status(&self, status: StudentStatus) -> anyhow::Result<Vec<Student>> {
        self.inner.find_by_status(status).await
    }
    async fn find_by_course(&self, course: &str) -> anyhow::Result<Vec<Student>> {
        self.inner.find_by_course(course).await
    }
    async fn find_with_violations(&self) -> anyhow::Result<Vec<Student>> {
        self.inner.find_with_violations().await
    }
    async fn link_item(&self, _id: &StudentId, _item_id: ItemId) -> anyhow::Result<Option<Student>> {
        Ok(None)
    }
    async fn unlink_item(
        &self,
        id: &StudentId,
        item_id: ItemId,
    ) -> anyhow::Result<Option<Student>> {
        self.inner.unlink_item(id, item_id).await
    }
    async fn remove(&self, id: &StudentId) -> anyhow::Result<Option<Student>> {
        self.inner.remove(id).await
    }
}

#[tokio::test]
async fn vanished_holder_rejects_registration() {
    let state = AppState::new(
        RuntimeConfig::default(),
        Arc::new(InMemoryItemRepository::new()),
        Arc::new(VanishingHolders::default()),
    );
    register_student(&state, enrolled("2024-0009", "BSCS"))
        .await
        .unwrap();

    let err = register_item(&state, reusable_bottle(Some("2024-0009")))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert!(evaluation_queue(&state).await.unwrap().is_empty());
}

/// Counts WARN events seen by the scoped subscriber.
struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[tokio::test]
async fn alert_is_warned_once_per_evaluation() {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));
    let _guard = tracing::subscriber::set_default(subscriber);

    let state = state();
    let gun = register_item(
        &state,
        intake_item(
            "Handgun",
            PrimaryCategory::Weapon,
            SecondaryCategory::Firearm,
            UsageType::Other,
            1,
            None,
        ),
    )
    .await
    .unwrap();
    let bottle = register_item(&state, reusable_bottle(None)).await.unwrap();

    let evaluation = evaluate_item(&state, gun).await.unwrap();
    assert!(evaluation.result.requires_immediate_alert());
    assert_eq!(warnings.load(Ordering::SeqCst), 1);

    evaluate_item(&state, bottle).await.unwrap();
    assert_eq!(warnings.load(Ordering::SeqCst), 1);
}
