//! [`SearchBackend`] over the Splunk search job endpoints.

use crate::backend::SearchBackend;
use crate::client::{SplunkClient, retry_call};
use crate::endpoints::{self, CreateJobOptions};
use crate::error::ClientError;
use crate::models::{JobStatus, ResultRecord};
use crate::query::Query;

impl SearchBackend for SplunkClient {
    async fn create_job(&mut self, query: &Query) -> Result<String, ClientError> {
        let options = CreateJobOptions {
            exec_mode: Some(query.options().mode.to_string()),
            earliest_time: Some(query.options().earliest.clone()),
            latest_time: Some(query.options().latest.clone()),
        };
        retry_call!(
            self,
            auth,
            endpoints::create_job(
                &self.http,
                &self.base_url,
                &auth,
                query.text(),
                &options,
                self.max_retries,
            )
            .await
        )
    }

    async fn job_status(&mut self, sid: &str) -> Result<Option<JobStatus>, ClientError> {
        retry_call!(
            self,
            auth,
            endpoints::get_job_status(&self.http, &self.base_url, &auth, sid, self.max_retries)
                .await
        )
    }

    async fn fetch_results(
        &mut self,
        sid: &str,
        offset: u64,
        count: u64,
    ) -> Result<Vec<ResultRecord>, ClientError> {
        retry_call!(
            self,
            auth,
            endpoints::get_results(
                &self.http,
                &self.base_url,
                &auth,
                sid,
                offset,
                count,
                self.max_retries,
            )
            .await
        )
    }

    async fn cancel_job(&mut self, sid: &str) -> Result<(), ClientError> {
        retry_call!(
            self,
            auth,
            endpoints::cancel_job(&self.http, &self.base_url, &auth, sid, self.max_retries).await
        )
    }
}
