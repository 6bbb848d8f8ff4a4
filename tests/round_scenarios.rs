use sandwich_rush::GameConfig;
use sandwich_rush::sim::{
    FailureReason, GameEvent, GameListener, Ingredient, InputOutcome, Order, Outcome, Resolution,
    RoundController, RoundPhase,
};

use Ingredient::*;

fn blt() -> Order {
    Order::fixed(vec![BreadBottom, Lettuce, Cheese, BreadTop], 30_000).unwrap()
}

/// Collects what the presentation layer would see
#[derive(Default)]
struct Scene {
    orders: Vec<Order>,
    stacks: Vec<Vec<Ingredient>>,
    ticks: u32,
    resolved: Vec<Resolution>,
}

impl GameListener for Scene {
    fn on_order_changed(&mut self, order: &Order) {
        self.orders.push(order.clone());
    }

    fn on_stack_changed(&mut self, stack: &[Ingredient]) {
        self.stacks.push(stack.to_vec());
    }

    fn on_tick(&mut self, _remaining_ms: u64, _progress: f32, _urgent: bool) {
        self.ticks += 1;
    }

    fn on_round_resolved(&mut self, resolution: &Resolution) {
        self.resolved.push(*resolution);
    }
}

fn pump(ctrl: &mut RoundController, scene: &mut Scene) {
    for event in ctrl.drain_events() {
        event.dispatch(scene);
    }
}

/// Default-config controller that has already served `wins` correct orders
fn controller_with_wins(wins: u32) -> RoundController {
    let mut ctrl = RoundController::new(GameConfig::default(), 1).unwrap();
    for _ in 0..wins {
        ctrl.start_round_with(blt());
        for ingredient in [BreadBottom, Lettuce, Cheese, BreadTop] {
            ctrl.player_add_ingredient(ingredient).unwrap();
        }
    }
    ctrl.drain_events().for_each(drop);
    ctrl
}

#[test]
fn correct_sandwich_scores() {
    let mut ctrl = RoundController::new(GameConfig::default(), 7).unwrap();
    let mut scene = Scene::default();
    ctrl.start_round_with(blt());

    for ingredient in [BreadBottom, Lettuce, Cheese, BreadTop] {
        ctrl.player_add_ingredient(ingredient).unwrap();
    }
    pump(&mut ctrl, &mut scene);

    assert_eq!(scene.orders, vec![blt()]);
    assert_eq!(
        scene.resolved,
        vec![Resolution {
            round: 1,
            outcome: Outcome::Success,
            score_delta: 100,
            new_score: 100,
        }]
    );
    // Empty, four growing stacks, then cleared
    assert_eq!(scene.stacks.len(), 6);
    assert_eq!(scene.stacks[4], vec![BreadBottom, Lettuce, Cheese, BreadTop]);
    assert!(scene.stacks[5].is_empty());
}

#[test]
fn swapped_middle_fails_on_last_append() {
    let mut ctrl = controller_with_wins(1);
    assert_eq!(ctrl.score(), 100);
    ctrl.start_round_with(blt());

    for ingredient in [BreadBottom, Cheese, Lettuce] {
        assert!(matches!(
            ctrl.player_add_ingredient(ingredient),
            Ok(InputOutcome::Pending(_))
        ));
    }
    let last = ctrl.player_add_ingredient(BreadTop).unwrap();

    assert_eq!(
        last,
        InputOutcome::Resolved(Resolution {
            round: 2,
            outcome: Outcome::Failure(FailureReason::WrongOrder),
            score_delta: -50,
            new_score: 50,
        })
    );

    // Next correct order still earns the standard amount
    ctrl.start_round_with(blt());
    for ingredient in [BreadBottom, Lettuce, Cheese] {
        ctrl.player_add_ingredient(ingredient).unwrap();
    }
    let last = ctrl.player_add_ingredient(BreadTop).unwrap();
    assert!(matches!(
        last,
        InputOutcome::Resolved(Resolution {
            score_delta: 100,
            new_score: 150,
            ..
        })
    ));
}

#[test]
fn each_round_resolves_exactly_once() {
    let mut ctrl = RoundController::new(GameConfig::default(), 3).unwrap();
    let mut scene = Scene::default();

    for _ in 0..25 {
        let order = ctrl.start_round().clone();
        for ingredient in order.ingredients() {
            ctrl.player_add_ingredient(*ingredient).unwrap();
        }
        // Clock keeps running after the verdict
        ctrl.advance(order.time_limit_ms() * 2);
    }
    pump(&mut ctrl, &mut scene);

    assert_eq!(scene.resolved.len(), 25);
    assert!(scene.resolved.iter().all(|r| r.outcome.is_success()));
    assert_eq!(ctrl.score(), 2_500);
}

#[test]
fn expiry_with_partial_stack_fails_once() {
    let mut ctrl = controller_with_wins(0);
    let mut scene = Scene::default();
    ctrl.start_round_with(blt());
    ctrl.player_add_ingredient(BreadBottom).unwrap();
    ctrl.player_add_ingredient(Lettuce).unwrap();

    let mut resolution = None;
    for _ in 0..400 {
        if let Some(r) = ctrl.advance(100) {
            assert!(resolution.is_none(), "resolved twice");
            resolution = Some(r);
        }
    }
    pump(&mut ctrl, &mut scene);

    let r = resolution.expect("order should time out");
    assert_eq!(r.outcome, Outcome::Failure(FailureReason::TimeExpired));
    assert_eq!(r.score_delta, -50);
    assert_eq!(r.new_score, 0);
    assert_eq!(scene.resolved, vec![r]);
    // 299 ticks before expiry, none after
    assert_eq!(scene.ticks, 299);
    assert_eq!(ctrl.phase(), RoundPhase::Idle);
}

#[test]
fn stale_timer_cannot_fail_next_round() {
    let mut ctrl = RoundController::new(GameConfig::default(), 11).unwrap();
    ctrl.start_round_with(blt());
    ctrl.advance(29_999);
    for ingredient in [BreadBottom, Lettuce, Cheese, BreadTop] {
        ctrl.player_add_ingredient(ingredient).unwrap();
    }

    ctrl.start_round_with(blt());
    assert_eq!(ctrl.advance(1), None);
    assert_eq!(ctrl.phase(), RoundPhase::OrderActive);
    assert_eq!(ctrl.score(), 100);
}

#[test]
fn invalid_removal_reports_and_keeps_state() {
    let mut ctrl = controller_with_wins(1);
    ctrl.start_round_with(blt());
    ctrl.player_add_ingredient(BreadBottom).unwrap();

    let err = ctrl.player_remove_ingredient(1).unwrap_err();
    assert_eq!(err.to_string(), "stack index 1 out of range (stack holds 1)");
    assert_eq!(ctrl.stack(), &[BreadBottom]);
    assert_eq!(ctrl.score(), 100);
}

#[test]
fn events_serialize_for_the_browser() {
    let mut ctrl = RoundController::new(GameConfig::default(), 5).unwrap();
    ctrl.start_round_with(blt());
    let events: Vec<GameEvent> = ctrl.drain_events().collect();

    let json = serde_json::to_string(&events).unwrap();
    assert!(json.starts_with(r#"[{"type":"OrderChanged""#));
    assert!(json.contains(r#""ingredients":["bread_bottom","lettuce","cheese","bread_top"]"#));
    assert!(json.contains(r#""time_limit_ms":30000"#));
}

#[test]
fn score_floors_at_zero_across_failures() {
    let mut ctrl = controller_with_wins(1);
    let mut scores = Vec::new();
    for _ in 0..3 {
        ctrl.start_round_with(blt());
        let r = ctrl.advance(30_000).expect("order should time out");
        assert_eq!(r.score_delta, -50);
        scores.push(r.new_score);
    }
    assert_eq!(scores, vec![50, 0, 0]);
}

#[test]
fn malformed_orders_are_rejected_on_the_way_in() {
    for json in [
        r#"{"ingredients":[],"time_limit_ms":0}"#,
        r#"{"ingredients":[],"time_limit_ms":30000}"#,
        r#"{"ingredients":["bread_bottom","bread_top"],"time_limit_ms":0}"#,
    ] {
        assert!(serde_json::from_str::<Order>(json).is_err(), "accepted {}", json);
    }

    let order: Order = serde_json::from_str(&serde_json::to_string(&blt()).unwrap()).unwrap();
    assert_eq!(order, blt());
}
