use chrono::{NaiveDate, Utc};
use pretty_assertions::assert_eq;
use price_pulse::data::{ForecastPoint, MarketPriceRecord, PairKey};
use price_pulse::store::{InMemoryStore, SeriesStore};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
}

fn market_record(
    commodity_id: i64,
    market_id: i64,
    region_id: i64,
    day: u32,
    source: &str,
    price: f64,
) -> MarketPriceRecord {
    MarketPriceRecord {
        commodity_id,
        market_id,
        region_id,
        date: date(day),
        source: source.to_string(),
        price_prevailing: price,
        price_low: None,
        price_high: None,
    }
}

fn forecast_row(pair: PairKey, day: u32, price: f64) -> ForecastPoint {
    ForecastPoint {
        commodity_id: pair.commodity_id,
        region_id: pair.region_id,
        forecast_date: date(day),
        predicted_price: price,
        confidence_lower: price - 1.0,
        confidence_upper: price + 1.0,
        model_used: "linear_regression".to_string(),
        generated_at: Utc::now(),
    }
}

#[test]
fn test_upsert_replaces_on_conflict_key() {
    let mut store = InMemoryStore::new();
    store.upsert_market_prices(vec![market_record(1, 1, 1, 1, "DA", 40.0)]);
    store.upsert_market_prices(vec![market_record(1, 1, 1, 1, "DA", 44.0)]);

    let history = store.read_all_price_history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].price, 44.0);
}

#[test]
fn test_read_averages_markets_and_sources_per_day() {
    let mut store = InMemoryStore::new();
    store.upsert_market_prices(vec![
        market_record(1, 1, 1, 1, "DA", 40.0),
        market_record(1, 2, 1, 1, "DA", 50.0),
        market_record(1, 1, 1, 1, "PSA", 45.0),
    ]);

    let history = store.read_all_price_history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].price, 45.0);
}

#[test]
fn test_read_is_globally_sorted() {
    let mut store = InMemoryStore::new();
    store.upsert_market_prices(vec![
        market_record(2, 1, 1, 2, "DA", 10.0),
        market_record(1, 1, 2, 1, "DA", 20.0),
        market_record(1, 1, 1, 3, "DA", 30.0),
        market_record(1, 1, 1, 1, "DA", 40.0),
    ]);

    let history = store.read_all_price_history().unwrap();
    let keys: Vec<(i64, i64, NaiveDate)> = history
        .iter()
        .map(|row| (row.commodity_id, row.region_id, row.date))
        .collect();

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_staged_writes_invisible_before_commit() {
    let mut store = InMemoryStore::new();
    let pair = PairKey::new(1, 1);

    store.insert_forecasts(vec![forecast_row(pair, 10, 50.0)]).unwrap();
    assert_eq!(store.forecast_count(), 0);

    store.commit().unwrap();
    assert_eq!(store.forecast_count(), 1);
}

#[test]
fn test_commit_applies_deletes_before_inserts() {
    let mut store = InMemoryStore::new();
    let pair = PairKey::new(1, 1);

    store.insert_forecasts(vec![forecast_row(pair, 10, 50.0)]).unwrap();
    store.commit().unwrap();

    // Replace the same future window in one staged batch.
    store.delete_future_forecasts(pair, date(5)).unwrap();
    store.insert_forecasts(vec![forecast_row(pair, 10, 55.0)]).unwrap();
    store.commit().unwrap();

    let rows = store.forecasts_for_pair(pair);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].predicted_price, 55.0);
}

#[test]
fn test_delete_future_only_affects_rows_after_cutoff() {
    let mut store = InMemoryStore::new();
    let pair = PairKey::new(1, 1);

    store
        .insert_forecasts(vec![
            forecast_row(pair, 3, 48.0),
            forecast_row(pair, 8, 49.0),
            forecast_row(pair, 12, 50.0),
        ])
        .unwrap();
    store.commit().unwrap();

    store.delete_future_forecasts(pair, date(8)).unwrap();
    store.commit().unwrap();

    let remaining: Vec<NaiveDate> = store
        .forecasts_for_pair(pair)
        .iter()
        .map(|row| row.forecast_date)
        .collect();
    assert_eq!(remaining, vec![date(3), date(8)]);
}

#[test]
fn test_delete_scoped_to_one_pair() {
    let mut store = InMemoryStore::new();
    let pair_a = PairKey::new(1, 1);
    let pair_b = PairKey::new(1, 2);

    store
        .insert_forecasts(vec![forecast_row(pair_a, 10, 50.0), forecast_row(pair_b, 10, 60.0)])
        .unwrap();
    store.commit().unwrap();

    store.delete_future_forecasts(pair_a, date(1)).unwrap();
    store.commit().unwrap();

    assert!(store.forecasts_for_pair(pair_a).is_empty());
    assert_eq!(store.forecasts_for_pair(pair_b).len(), 1);
}
