//! Column accessors that plug the retail record shapes into the ranking engine.

use crate::shared::ranking::{FieldValue, MetricAxis, MetricRecord};

use super::dto::{CityRecord, CustomerRecord, DailyPoint, ProductRecord, RecordId};

fn metric_of(axis: MetricAxis, sales: Option<f64>, quantity: Option<f64>) -> Option<f64> {
    match axis {
        MetricAxis::Sales => sales,
        MetricAxis::Quantity => quantity,
    }
}

impl RecordId {
    fn field_value(&self) -> FieldValue<'_> {
        match self {
            RecordId::Int(id) => FieldValue::Number(*id as f64),
            RecordId::Text(id) => FieldValue::Text(id),
        }
    }
}

impl MetricRecord for CustomerRecord {
    const SORTABLE_COLUMNS: &'static [&'static str] =
        &["id", "country", "date", "purchases", "sales", "quantity"];

    fn field(&self, column: &str) -> FieldValue<'_> {
        match column {
            "id" => self.id.as_ref().map_or(FieldValue::Missing, RecordId::field_value),
            "country" => FieldValue::text(self.country.as_deref()),
            "date" => FieldValue::text(self.date.as_deref()),
            "purchases" => FieldValue::number(self.purchases.map(|p| p as f64)),
            "sales" => FieldValue::number(self.sales),
            "quantity" => FieldValue::number(self.quantity),
            _ => FieldValue::Missing,
        }
    }

    fn metric(&self, axis: MetricAxis) -> Option<f64> {
        metric_of(axis, self.sales, self.quantity)
    }
}

impl MetricRecord for ProductRecord {
    const SORTABLE_COLUMNS: &'static [&'static str] = &["name", "sales", "quantity"];

    fn field(&self, column: &str) -> FieldValue<'_> {
        match column {
            "name" => FieldValue::text(self.name.as_deref()),
            "sales" => FieldValue::number(self.sales),
            "quantity" => FieldValue::number(self.quantity),
            _ => FieldValue::Missing,
        }
    }

    fn metric(&self, axis: MetricAxis) -> Option<f64> {
        metric_of(axis, self.sales, self.quantity)
    }
}

impl ProductRecord {
    /// Share supplied by the data source for the axis, if any.
    pub fn share(&self, axis: MetricAxis) -> Option<f64> {
        metric_of(axis, self.percentage.sales, self.percentage.quantity)
    }
}

impl MetricRecord for CityRecord {
    const SORTABLE_COLUMNS: &'static [&'static str] = &["city", "lat", "lng", "sales", "quantity"];

    fn field(&self, column: &str) -> FieldValue<'_> {
        match column {
            "city" => FieldValue::text(self.city.as_deref()),
            "lat" => FieldValue::number(self.lat),
            "lng" => FieldValue::number(self.lng),
            "sales" => FieldValue::number(self.sales),
            "quantity" => FieldValue::number(self.quantity),
            _ => FieldValue::Missing,
        }
    }

    fn metric(&self, axis: MetricAxis) -> Option<f64> {
        metric_of(axis, self.sales, self.quantity)
    }
}

impl MetricRecord for DailyPoint {
    const SORTABLE_COLUMNS: &'static [&'static str] = &["date", "purchases", "sales", "quantity"];

    fn field(&self, column: &str) -> FieldValue<'_> {
        match column {
            "date" => FieldValue::text(self.date.as_deref()),
            "purchases" => FieldValue::number(self.purchases.map(|p| p as f64)),
            "sales" => FieldValue::number(self.sales),
            "quantity" => FieldValue::number(self.quantity),
            _ => FieldValue::Missing,
        }
    }

    fn metric(&self, axis: MetricAxis) -> Option<f64> {
        metric_of(axis, self.sales, self.quantity)
    }
}
