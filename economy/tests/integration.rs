use economy::{
    EconomyConfig, PlayerId, Treasury, FRAMES_PER_SECOND, INCOME_WINDOW_SECS,
};

/// One audible deposit per simulation second, driven frame by frame.
fn run_steady_income(treasury: &mut Treasury, seconds: u64, per_second: u64) {
    for frame in 0..seconds * FRAMES_PER_SECOND {
        treasury.update_income_window(frame);
        if frame % FRAMES_PER_SECOND == 0 {
            treasury.deposit(per_second, true, &mut ());
        }
    }
}

#[test]
fn configured_match_start() {
    let config = EconomyConfig::from_toml("starting_cash = 10000").unwrap();

    let mut treasury = Treasury::new(PlayerId(0));
    config.init_treasury(&mut treasury);

    assert_eq!(treasury.balance(), 10_000);
    assert_eq!(treasury.cash_per_minute(), 0);
}

#[test]
fn steady_income_converges_on_the_per_minute_rate() {
    let mut treasury = Treasury::new(PlayerId(0));

    // Three minutes of 100 cash per second; the window saturates at one
    // minute's worth.
    run_steady_income(&mut treasury, 180, 100);

    assert_eq!(
        treasury.cash_per_minute(),
        INCOME_WINDOW_SECS as u64 * 100
    );
    assert_eq!(treasury.balance(), 180 * 100);
}

#[test]
fn income_estimate_decays_while_idle() {
    let mut treasury = Treasury::new(PlayerId(0));
    run_steady_income(&mut treasury, 30, 100);
    assert_eq!(treasury.cash_per_minute(), 30 * 100);

    // Idling until second 75 walks the cursor over the oldest sixteen
    // deposits; the thirty empty slots in between were already zero.
    treasury.update_income_window(75 * FRAMES_PER_SECOND);
    assert_eq!(treasury.cash_per_minute(), 14 * 100);

    // A full window of idling leaves nothing.
    treasury.update_income_window(150 * FRAMES_PER_SECOND);
    assert_eq!(treasury.cash_per_minute(), 0);
}

#[test]
fn save_and_reload_keeps_the_balance_but_not_the_estimate() {
    let mut treasury = Treasury::new(PlayerId(2));
    treasury.set_starting_cash(1_000);
    run_steady_income(&mut treasury, 20, 50);
    treasury.withdraw(300, true, &mut ());
    let balance = treasury.balance();
    assert!(treasury.cash_per_minute() > 0);

    let snapshot = treasury.snapshot();

    let mut reloaded = Treasury::new(PlayerId(2));
    reloaded.restore(&snapshot).unwrap();

    assert_eq!(reloaded.balance(), balance);
    // The window is not persisted; the estimate restarts from empty.
    assert_eq!(reloaded.cash_per_minute(), 0);

    // And refills from live play.
    run_steady_income(&mut reloaded, 5, 50);
    assert_eq!(reloaded.cash_per_minute(), 5 * 50);
}

#[test]
fn lockstep_copies_reach_identical_state() {
    fn scripted_run() -> Treasury {
        let mut treasury = Treasury::new(PlayerId(1));
        treasury.set_starting_cash(10_000);

        for frame in 0..120 * FRAMES_PER_SECOND {
            treasury.update_income_window(frame);
            if frame % (4 * FRAMES_PER_SECOND) == 0 {
                treasury.deposit(120, true, &mut ());
            }
            if frame % (25 * FRAMES_PER_SECOND) == 7 {
                treasury.withdraw(900, true, &mut ());
            }
        }
        treasury
    }

    assert_eq!(scripted_run(), scripted_run());
}

#[test]
fn frame_order_within_a_second_does_not_change_the_estimate() {
    // Deposits spread across the frames of one second land in the same slot.
    let mut spread = Treasury::new(PlayerId(0));
    for frame in 0..FRAMES_PER_SECOND {
        spread.update_income_window(frame);
        spread.deposit(10, true, &mut ());
    }

    let mut front_loaded = Treasury::new(PlayerId(0));
    front_loaded.update_income_window(0);
    front_loaded.deposit(10 * FRAMES_PER_SECOND, true, &mut ());
    front_loaded.update_income_window(FRAMES_PER_SECOND - 1);

    assert_eq!(spread.cash_per_minute(), front_loaded.cash_per_minute());
}
