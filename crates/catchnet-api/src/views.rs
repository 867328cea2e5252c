// Detail endpoints scoped to a (port, date) pair, plus the root banner.

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{ApiStatus, DailyExports, DailyView, IsoDate, Port};

impl ApiClient {
    /// Fetch the daily view for a port on a given date.
    ///
    /// `GET /api/daily_view?port={port}&date={date}`. The payload is
    /// returned as-is.
    pub async fn fetch_daily_view(&self, port: &Port, date: &IsoDate) -> Result<DailyView, Error> {
        let url = self.scoped_url("api/daily_view", port, date)?;
        Ok(DailyView::from(self.get_json(url).await?))
    }

    /// Fetch export tonnage per species for a port on a given date.
    ///
    /// `GET /api/daily_exports_view?port={port}&date={date}`
    pub async fn fetch_daily_exports(
        &self,
        port: &Port,
        date: &IsoDate,
    ) -> Result<DailyExports, Error> {
        let url = self.scoped_url("api/daily_exports_view", port, date)?;
        Ok(DailyExports::from(self.get_json(url).await?))
    }

    /// Check that the API is up.
    ///
    /// `GET /`
    pub async fn fetch_status(&self) -> Result<ApiStatus, Error> {
        let body = self.get_json(self.base_url().clone()).await?;
        serde_json::from_value(body.clone()).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: body.to_string(),
        })
    }
}
