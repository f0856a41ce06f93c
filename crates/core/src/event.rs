use chrono::{DateTime, Utc};
use percent_encoding::percent_decode_str;
use serde::Deserialize;

/// An S3 event notification as delivered to the function.
///
/// Only the fields the notifier reads are modelled; everything else in the
/// notification document is ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Event {
    /// Notification records. S3 may batch several into one delivery.
    #[serde(rename = "Records", default)]
    pub records: Vec<S3EventRecord>,
}

impl S3Event {
    /// Build the trigger for the first record. Later records are ignored.
    pub fn first_trigger(&self) -> Option<TriggerEvent> {
        self.records.first().map(TriggerEvent::from_record)
    }
}

/// A single record of an S3 event notification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3EventRecord {
    /// Event name, e.g. `ObjectCreated:Put`.
    pub event_name: String,

    /// When S3 finished processing the request.
    pub event_time: DateTime<Utc>,

    /// Region the bucket lives in.
    pub aws_region: String,

    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Object {
    /// Object key, URL-encoded the way S3 writes it into notifications.
    pub key: String,

    #[serde(default)]
    pub size: Option<u64>,
}

/// The part of a creation record the notifier acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerEvent {
    pub bucket: String,
    pub region: String,
    pub event_name: String,
    pub event_time: DateTime<Utc>,

    /// Object key exactly as it appears in the notification (URL-encoded).
    pub key: String,
}

impl TriggerEvent {
    pub fn from_record(record: &S3EventRecord) -> Self {
        Self {
            bucket: record.s3.bucket.name.clone(),
            region: record.aws_region.clone(),
            event_name: record.event_name.clone(),
            event_time: record.event_time,
            key: record.s3.object.key.clone(),
        }
    }

    /// The real object key: `+` becomes a space, then `%xx` escapes are
    /// decoded. Invalid UTF-8 after decoding is replaced lossily.
    pub fn decoded_key(&self) -> String {
        let spaced = self.key.replace('+', " ");
        percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(keys: &[&str]) -> serde_json::Value {
        let records: Vec<serde_json::Value> = keys
            .iter()
            .map(|key| {
                serde_json::json!({
                    "eventVersion": "2.1",
                    "eventSource": "aws:s3",
                    "awsRegion": "us-west-2",
                    "eventTime": "2023-03-14T09:26:53.000Z",
                    "eventName": "ObjectCreated:Put",
                    "userIdentity": {"principalId": "AWS:EXAMPLE"},
                    "s3": {
                        "s3SchemaVersion": "1.0",
                        "configurationId": "itslog-surveys",
                        "bucket": {
                            "name": "itslog-uploads",
                            "arn": "arn:aws:s3:::itslog-uploads"
                        },
                        "object": {
                            "key": key,
                            "size": 1024,
                            "eTag": "d41d8cd98f00b204e9800998ecf8427e"
                        }
                    }
                })
            })
            .collect();
        serde_json::json!({ "Records": records })
    }

    #[test]
    fn parses_s3_notification() {
        let event: S3Event =
            serde_json::from_value(notification(&["itslog/surveys/report.txt"])).unwrap();
        assert_eq!(event.records.len(), 1);

        let record = &event.records[0];
        assert_eq!(record.event_name, "ObjectCreated:Put");
        assert_eq!(record.aws_region, "us-west-2");
        assert_eq!(record.s3.bucket.name, "itslog-uploads");
        assert_eq!(record.s3.object.key, "itslog/surveys/report.txt");
        assert_eq!(record.s3.object.size, Some(1024));
        assert_eq!(
            record.event_time.to_rfc3339(),
            "2023-03-14T09:26:53+00:00"
        );
    }

    #[test]
    fn first_trigger_uses_first_record_only() {
        let event: S3Event = serde_json::from_value(notification(&[
            "itslog/surveys/first.txt",
            "itslog/surveys/second.txt",
        ]))
        .unwrap();

        let trigger = event.first_trigger().unwrap();
        assert_eq!(trigger.key, "itslog/surveys/first.txt");
        assert_eq!(trigger.bucket, "itslog-uploads");
        assert_eq!(trigger.region, "us-west-2");
        assert_eq!(trigger.event_name, "ObjectCreated:Put");
    }

    #[test]
    fn missing_records_yields_no_trigger() {
        let event: S3Event = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(event.records.is_empty());
        assert!(event.first_trigger().is_none());
    }

    #[test]
    fn record_without_key_is_rejected() {
        let json = serde_json::json!({
            "Records": [{
                "awsRegion": "us-west-2",
                "eventTime": "2023-03-14T09:26:53.000Z",
                "eventName": "ObjectCreated:Put",
                "s3": { "bucket": { "name": "b" }, "object": {} }
            }]
        });
        assert!(serde_json::from_value::<S3Event>(json).is_err());
    }

    #[test]
    fn decoded_key_handles_plus_and_escapes() {
        let event: S3Event = serde_json::from_value(notification(&[
            "itslog/surveys/crash+report%281%29.txt",
        ]))
        .unwrap();
        let trigger = event.first_trigger().unwrap();
        assert_eq!(trigger.decoded_key(), "itslog/surveys/crash report(1).txt");
        // The raw key is kept untouched for the message metadata.
        assert_eq!(trigger.key, "itslog/surveys/crash+report%281%29.txt");
    }

    #[test]
    fn decoded_key_keeps_escaped_plus() {
        let event: S3Event =
            serde_json::from_value(notification(&["itslog/surveys/a%2Bb.txt"])).unwrap();
        let trigger = event.first_trigger().unwrap();
        assert_eq!(trigger.decoded_key(), "itslog/surveys/a+b.txt");
    }

    #[test]
    fn plain_key_decodes_to_itself() {
        let event: S3Event =
            serde_json::from_value(notification(&["itslog/surveys/report.txt"])).unwrap();
        let trigger = event.first_trigger().unwrap();
        assert_eq!(trigger.decoded_key(), trigger.key);
    }
}
