//! Integration tests for filtered tour search.

mod common;

use sqlx::PgPool;
use tour_core::search::{RawSearchParams, SearchFilter};
use tour_db::repositories::SearchRepo;

struct Catalogue {
    carpathians: i64,
    paris: i64,
    tokyo: i64,
}

async fn seed(pool: &PgPool) -> Catalogue {
    let kyiv = common::insert_location(pool, "Kyiv", "Україна").await;
    let yaremche = common::insert_location(pool, "Yaremche", "Ukraine").await;
    let paris_loc = common::insert_location(pool, "Paris", "France").await;
    let tokyo_loc = common::insert_location(pool, "Tokyo", "Japan").await;

    let carpathians = common::insert_tour(pool, "Carpathian hike", 120.0, 4.7).await;
    common::insert_date(pool, carpathians, kyiv, yaremche, 3, 10).await;
    common::insert_card_image(pool, carpathians, "/static/images/carpathians.jpg").await;

    let paris = common::insert_tour(pool, "Paris 100% romance", 950.0, 5.0).await;
    common::insert_date(pool, paris, kyiv, paris_loc, 5, 10).await;
    // A second date must not duplicate the tour in results.
    common::insert_date(pool, paris, kyiv, paris_loc, 7, 10).await;

    let tokyo = common::insert_tour(pool, "Tokyo lights", 2100.0, 3.2).await;
    common::insert_date(pool, tokyo, kyiv, tokyo_loc, 10, 10).await;

    common::insert_tour_with_status(pool, "Hidden draft", 10.0, 5.0, "inactive").await;

    Catalogue {
        carpathians,
        paris,
        tokyo,
    }
}

async fn ids(pool: &PgPool, raw: RawSearchParams<'_>) -> (Vec<i64>, i64) {
    let filter = SearchFilter::parse(&raw).unwrap();
    let rows = SearchRepo::search(pool, &filter).await.unwrap();
    let total = SearchRepo::count(pool, &filter).await.unwrap();
    (rows.into_iter().map(|r| r.id).collect(), total)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn default_search_lists_active_tours_recommended_first(pool: PgPool) {
    let c = seed(&pool).await;
    let (found, total) = ids(&pool, RawSearchParams::default()).await;
    assert_eq!(found, vec![c.paris, c.carpathians, c.tokyo]);
    assert_eq!(total, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn every_sort_key_orders_rows(pool: PgPool) {
    let c = seed(&pool).await;
    let cases = [
        ("price_asc", vec![c.carpathians, c.paris, c.tokyo]),
        ("price_desc", vec![c.tokyo, c.paris, c.carpathians]),
        ("rating_desc", vec![c.paris, c.carpathians, c.tokyo]),
        ("title_asc", vec![c.carpathians, c.paris, c.tokyo]),
        ("newest", vec![c.tokyo, c.paris, c.carpathians]),
        ("bogus", vec![c.paris, c.carpathians, c.tokyo]),
    ];

    for (sort_by, expected) in cases {
        let raw = RawSearchParams {
            sort_by: Some(sort_by),
            ..Default::default()
        };
        let (found, _) = ids(&pool, raw).await;
        assert_eq!(found, expected, "sortBy={sort_by}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn result_fields_and_image_fallback(pool: PgPool) {
    let c = seed(&pool).await;
    let filter = SearchFilter::parse(&RawSearchParams {
        sort_by: Some("price_asc"),
        ..Default::default()
    })
    .unwrap();
    let rows = SearchRepo::search(&pool, &filter).await.unwrap();

    assert_eq!(rows[0].id, c.carpathians);
    assert_eq!(rows[0].image_src, "/static/images/carpathians.jpg");
    assert_eq!(rows[0].duration, Some(3));
    assert_eq!(rows[0].location.as_deref(), Some("Yaremche, Ukraine"));
    assert_eq!(rows[0].region.as_deref(), Some("Ukraine"));
    assert_eq!(rows[1].image_src, "/static/images/no-image.jpg");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn title_matches_literally(pool: PgPool) {
    let c = seed(&pool).await;
    let (found, _) = ids(
        &pool,
        RawSearchParams {
            title: Some("100%"),
            ..Default::default()
        },
    )
    .await;
    assert_eq!(found, vec![c.paris]);

    let (found, _) = ids(
        &pool,
        RawSearchParams {
            title: Some("HIKE"),
            ..Default::default()
        },
    )
    .await;
    assert_eq!(found, vec![c.carpathians]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn price_rating_and_duration_filters(pool: PgPool) {
    let c = seed(&pool).await;

    let (found, _) = ids(
        &pool,
        RawSearchParams {
            min_price: Some("100"),
            max_price: Some("1000"),
            ..Default::default()
        },
    )
    .await;
    assert_eq!(found, vec![c.paris, c.carpathians]);

    let (found, _) = ids(
        &pool,
        RawSearchParams {
            ratings: Some("3,5"),
            ..Default::default()
        },
    )
    .await;
    assert_eq!(found, vec![c.paris, c.tokyo]);

    let (found, _) = ids(
        &pool,
        RawSearchParams {
            min_duration: Some("6"),
            max_duration: Some("8"),
            ..Default::default()
        },
    )
    .await;
    assert_eq!(found, vec![c.paris]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn region_filter_matches_either_spelling(pool: PgPool) {
    let c = seed(&pool).await;
    let (found, _) = ids(
        &pool,
        RawSearchParams {
            region: Some("1,3"),
            ..Default::default()
        },
    )
    .await;
    assert_eq!(found, vec![c.carpathians, c.tokyo]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pagination_keeps_total(pool: PgPool) {
    let c = seed(&pool).await;
    let (found, total) = ids(
        &pool,
        RawSearchParams {
            page: Some("2"),
            limit: Some("2"),
            ..Default::default()
        },
    )
    .await;
    assert_eq!(found, vec![c.tokyo]);
    assert_eq!(total, 3);
}
