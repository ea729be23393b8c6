use contracts::dashboards::d400_retail_metrics::{
    CityRecord, CustomerRecord, DashboardSummary, ProductRecord, ReportMonth,
};
use contracts::shared::ranking::{aggregate, MetricAxis};

use super::repository;
use crate::shared::data::{DataError, DataSource};

/// Customers of the month; an empty month is reported as `NoData`.
pub async fn get_customers(
    source: &DataSource,
    month: ReportMonth,
) -> Result<Vec<CustomerRecord>, DataError> {
    let customers = repository::load_customers(source, month).await?;
    if customers.is_empty() {
        return Err(DataError::NoData(month));
    }
    Ok(customers)
}

/// Cities of the month; an empty month is reported as `NoData`.
pub async fn get_cities(
    source: &DataSource,
    month: ReportMonth,
) -> Result<Vec<CityRecord>, DataError> {
    let cities = repository::load_cities(source, month).await?;
    if cities.is_empty() {
        return Err(DataError::NoData(month));
    }
    Ok(cities)
}

/// Products of the month; an empty month is an empty list.
pub async fn get_products(
    source: &DataSource,
    month: ReportMonth,
) -> Result<Vec<ProductRecord>, DataError> {
    repository::load_products(source, month).await
}

pub async fn get_summary(
    source: &DataSource,
    month: ReportMonth,
) -> Result<DashboardSummary, DataError> {
    let customers = repository::load_customers(source, month).await?;
    let products = repository::load_products(source, month).await?;
    Ok(build_summary(customers.len(), &products))
}

/// Header figures of the dashboard, totals and averages over products.
pub fn build_summary(total_customer: usize, products: &[ProductRecord]) -> DashboardSummary {
    let sales = aggregate(products, MetricAxis::Sales);
    let quantity = aggregate(products, MetricAxis::Quantity);

    DashboardSummary {
        total_customer,
        total_products: sales.count,
        total_quantity: quantity.total,
        total_sales: sales.total,
        average_quantity: quantity.average,
        average_sales: sales.average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::DataConfig;
    use std::path::PathBuf;

    const CUSTOMERS: &str = r#"{
        "March 2024": [
            {"id": 1, "country": "France", "date": "2024-03-01", "purchases": 2, "sales": 10.5, "quantity": 3},
            {"id": 2, "country": "Spain", "date": "2024-03-02", "purchases": 1, "sales": 4, "quantity": 1}
        ],
        "February 2024": []
    }"#;

    const PRODUCTS: &str = r#"{
        "March 2024": [
            {"name": "Chair", "sales": 30, "quantity": 9, "percentage": {"sales": 60, "quantity": 75}},
            {"name": "Desk", "sales": 20, "quantity": 3, "percentage": {"sales": 40, "quantity": 25}}
        ]
    }"#;

    fn fixture_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("d400-service-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = DataConfig::default();
        std::fs::write(dir.join(config.customers_file), CUSTOMERS).unwrap();
        std::fs::write(dir.join(config.products_file), PRODUCTS).unwrap();
        std::fs::write(dir.join(config.cities_file), "{\"March 2024\": []}").unwrap();
        dir
    }

    fn source(name: &str) -> DataSource {
        DataSource::new(&fixture_dir(name), &DataConfig::default())
    }

    #[test]
    fn test_build_summary() {
        let products: Vec<ProductRecord> =
            serde_json::from_str(r#"[{"name": "A", "sales": 30, "quantity": 9}, {"name": "B", "sales": 20, "quantity": 3}]"#)
                .unwrap();
        let summary = build_summary(5, &products);

        assert_eq!(summary.total_customer, 5);
        assert_eq!(summary.total_products, 2);
        assert_eq!(summary.total_sales, 50.0);
        assert_eq!(summary.total_quantity, 12.0);
        assert_eq!(summary.average_sales, Some(25.0));
        assert_eq!(summary.average_quantity, Some(6.0));
    }

    #[test]
    fn test_build_summary_without_products() {
        let summary = build_summary(3, &[]);
        assert_eq!(summary.total_products, 0);
        assert_eq!(summary.total_sales, 0.0);
        assert_eq!(summary.average_sales, None);
        assert_eq!(summary.average_quantity, None);
    }

    #[tokio::test]
    async fn test_customers_for_month() {
        let source = source("customers");
        let customers = get_customers(&source, ReportMonth::March2024).await.unwrap();
        assert_eq!(customers.len(), 2);

        let empty = get_customers(&source, ReportMonth::February2024).await;
        assert!(matches!(empty, Err(DataError::NoData(ReportMonth::February2024))));
    }

    #[tokio::test]
    async fn test_empty_cities_is_no_data() {
        let source = source("cities");
        let result = get_cities(&source, ReportMonth::March2024).await;
        assert!(matches!(result, Err(DataError::NoData(_))));
    }

    #[tokio::test]
    async fn test_products_for_absent_month_is_empty() {
        let source = source("products");
        let products = get_products(&source, ReportMonth::January2024).await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_summary_for_month() {
        let source = source("summary");
        let summary = get_summary(&source, ReportMonth::March2024).await.unwrap();
        assert_eq!(summary.total_customer, 2);
        assert_eq!(summary.total_products, 2);
        assert_eq!(summary.total_sales, 50.0);
        assert_eq!(summary.average_quantity, Some(6.0));
    }

    #[tokio::test]
    async fn test_summary_with_invalid_file() {
        let dir = fixture_dir("invalid");
        std::fs::write(dir.join(DataConfig::default().products_file), "{ broken").unwrap();
        let source = DataSource::new(&dir, &DataConfig::default());

        let result = get_summary(&source, ReportMonth::March2024).await;
        assert!(matches!(result, Err(DataError::Decode { .. })));
    }
}
