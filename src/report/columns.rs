use crate::attributed_enum;

attributed_enum! {
	pub enum Column: ColumnInfo (ticket_header: &'static str, email_header: &'static str, live_only: bool) {
		ProjectId { ticket_header: "Project Id", email_header: "Project Id", live_only: false },
		UsageDetails { ticket_header: "Usage Details", email_header: "Usage Details", live_only: false },
		TtlDate { ticket_header: "TTL Date", email_header: "TTL Date", live_only: true },
		Deleted { ticket_header: "Deleted", email_header: "Was Deleted", live_only: true },
	}
}
