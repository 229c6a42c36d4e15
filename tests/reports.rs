use movie_rentals::seed::{insert_movie, insert_rental};
use movie_rentals::{
    average_rental_duration, seed_if_empty, top_rented_movies, NewMovie, NewRental, RentalStore,
    Result, StoreError, DEFAULT_TOP_LIMIT,
};

fn seeded_store() -> Result<RentalStore> {
    let mut store = RentalStore::open_in_memory()?;
    store.initialize_schema()?;
    seed_if_empty(store.connection_mut())?;
    Ok(store)
}

fn empty_store() -> Result<RentalStore> {
    let store = RentalStore::open_in_memory()?;
    store.initialize_schema()?;
    Ok(store)
}

fn add_movie(store: &RentalStore, title: &str) -> Result<i64> {
    insert_movie(
        store.connection(),
        &NewMovie {
            title,
            genre: None,
            release_year: None,
        },
    )
}

fn add_rental(
    store: &RentalStore,
    movie_id: i64,
    rented: &str,
    returned: Option<&str>,
) -> Result<i64> {
    insert_rental(
        store.connection(),
        &NewRental {
            movie_id,
            customer_name: None,
            rental_date: rented,
            return_date: returned,
        },
    )
}

#[test]
fn top_five_on_seed_data() -> Result<()> {
    let store = seeded_store()?;

    let top = top_rented_movies(store.connection(), DEFAULT_TOP_LIMIT)?;

    let summary: Vec<(&str, i64)> = top
        .iter()
        .map(|m| (m.title.as_str(), m.rental_count))
        .collect();
    assert_eq!(
        summary,
        [
            ("The Shawshank Redemption", 5),
            ("The Dark Knight", 4),
            ("The Godfather", 3),
            ("The Matrix", 2),
            ("Avengers: Endgame", 1),
        ]
    );
    Ok(())
}

#[test]
fn top_one_is_shawshank() -> Result<()> {
    let store = seeded_store()?;

    let top = top_rented_movies(store.connection(), 1)?;

    assert_eq!(top.len(), 1);
    let first = &top[0];
    assert_eq!(first.movie_id, 1);
    assert_eq!(first.title, "The Shawshank Redemption");
    assert_eq!(first.genre.as_deref(), Some("Drama"));
    assert_eq!(first.release_year, Some(1994));
    assert_eq!(first.rental_count, 5);
    Ok(())
}

#[test]
fn ties_are_broken_by_title() -> Result<()> {
    let store = seeded_store()?;

    let top = top_rented_movies(store.connection(), 10)?;

    let singles: Vec<&str> = top
        .iter()
        .filter(|m| m.rental_count == 1)
        .map(|m| m.title.as_str())
        .collect();
    assert_eq!(
        singles,
        [
            "Avengers: Endgame",
            "Forrest Gump",
            "Inception",
            "Interstellar",
            "Pulp Fiction",
            "The Lion King",
        ]
    );
    assert!(top
        .windows(2)
        .all(|w| w[0].rental_count >= w[1].rental_count));
    Ok(())
}

#[test]
fn limit_beyond_movie_count_returns_all() -> Result<()> {
    let store = seeded_store()?;

    let top = top_rented_movies(store.connection(), 50)?;

    assert_eq!(top.len(), 10);
    assert_eq!(top.iter().map(|m| m.rental_count).sum::<i64>(), 20);
    Ok(())
}

#[test]
fn unrented_movies_are_included() -> Result<()> {
    let mut store = seeded_store()?;
    add_movie(&store, "Aaa Never Rented")?;
    // seeding is a no-op now but must not drop the new row
    seed_if_empty(store.connection_mut())?;

    let top = top_rented_movies(store.connection(), 50)?;

    assert_eq!(top.len(), 11);
    let last = top.last().unwrap();
    assert_eq!(last.title, "Aaa Never Rented");
    assert_eq!(last.rental_count, 0);
    assert_eq!(last.genre, None);
    assert_eq!(last.release_year, None);
    Ok(())
}

#[test]
fn zero_limit_is_rejected() -> Result<()> {
    let store = seeded_store()?;
    let err = top_rented_movies(store.connection(), 0).unwrap_err();
    assert!(matches!(err, StoreError::InvalidLimit(0)));
    Ok(())
}

#[test]
fn top_on_empty_store_is_empty() -> Result<()> {
    let store = empty_store()?;
    assert!(top_rented_movies(store.connection(), DEFAULT_TOP_LIMIT)?.is_empty());
    Ok(())
}

#[test]
fn average_of_completed_rentals() -> Result<()> {
    let store = empty_store()?;
    let movie = add_movie(&store, "Heat")?;
    add_rental(&store, movie, "2025-09-01", Some("2025-09-05"))?;
    add_rental(&store, movie, "2025-09-10", Some("2025-09-13"))?;
    // outstanding rentals are excluded from the mean
    add_rental(&store, movie, "2025-09-20", None)?;

    let avg = average_rental_duration(store.connection())?;

    assert_eq!(avg, Some(3.5));
    Ok(())
}

#[test]
fn average_on_seed_data() -> Result<()> {
    let store = seeded_store()?;

    let avg = average_rental_duration(store.connection())?.unwrap();

    assert!((avg - 50.0 / 17.0).abs() < 1e-9, "got {avg}");
    Ok(())
}

#[test]
fn average_without_completed_rentals_is_none() -> Result<()> {
    let store = empty_store()?;
    assert_eq!(average_rental_duration(store.connection())?, None);

    let movie = add_movie(&store, "Heat")?;
    add_rental(&store, movie, "2025-09-01", None)?;
    assert_eq!(average_rental_duration(store.connection())?, None);
    Ok(())
}

#[test]
fn same_day_return_averages_to_zero_not_none() -> Result<()> {
    let store = empty_store()?;
    let movie = add_movie(&store, "Heat")?;
    add_rental(&store, movie, "2025-09-01", Some("2025-09-01"))?;

    assert_eq!(average_rental_duration(store.connection())?, Some(0.0));
    Ok(())
}

#[test]
fn top_movie_serializes_by_field_name() -> Result<()> {
    let store = seeded_store()?;
    let top = top_rented_movies(store.connection(), 1)?;

    let value = serde_json::to_value(&top[0]).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "movie_id": 1,
            "title": "The Shawshank Redemption",
            "genre": "Drama",
            "release_year": 1994,
            "rental_count": 5,
        })
    );
    Ok(())
}

#[test]
fn unrented_movie_serializes_missing_fields_as_null() -> Result<()> {
    let store = empty_store()?;
    add_movie(&store, "Untitled")?;
    let top = top_rented_movies(store.connection(), 1)?;

    let value = serde_json::to_value(&top[0]).unwrap();

    assert_eq!(value["genre"], serde_json::Value::Null);
    assert_eq!(value["release_year"], serde_json::Value::Null);
    assert_eq!(value["rental_count"], 0);
    Ok(())
}
