// Report formatting: human-scaled byte counts and the stats message

use crate::models::ConnectionInfo;

const KIB: i64 = 1024;
const MIB: i64 = 1024 * 1024;
const GIB: i64 = 1024 * 1024 * 1024;

/// Formats a byte count with 1024-based units; two decimals above bytes.
pub fn format_traffic(bytes: i64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.2} GB", bytes as f64 / GIB as f64)
    }
}

/// Builds the HTML stats report delivered to the chat.
pub fn build_report(info: &ConnectionInfo) -> String {
    format!(
        "<b>\u{1F4CA} Server Stats</b>\n\
         <b>Active Connections:</b> {}\n\
         <b>Upload Traffic:</b> {}\n\
         <b>Download Traffic:</b> {}\n\
         <b>Total Traffic:</b> {}\n\
         <b>Timestamp:</b> {}",
        info.active_connections,
        format_traffic(info.upload_bytes),
        format_traffic(info.download_bytes),
        format_traffic(info.total_bytes),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
    )
}
