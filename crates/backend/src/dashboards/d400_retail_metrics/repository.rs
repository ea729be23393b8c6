use contracts::dashboards::d400_retail_metrics::{
    CityRecord, CustomerRecord, ProductRecord, ReportMonth,
};

use crate::shared::data::{DataError, DataSource};

pub async fn load_customers(
    source: &DataSource,
    month: ReportMonth,
) -> Result<Vec<CustomerRecord>, DataError> {
    source.read_month(&source.customers_path, month).await
}

pub async fn load_cities(
    source: &DataSource,
    month: ReportMonth,
) -> Result<Vec<CityRecord>, DataError> {
    source.read_month(&source.cities_path, month).await
}

pub async fn load_products(
    source: &DataSource,
    month: ReportMonth,
) -> Result<Vec<ProductRecord>, DataError> {
    source.read_month(&source.products_path, month).await
}
