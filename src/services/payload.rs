//! XML payload assembly for the add-or-replace page call.

use crate::domain::models::PageType;

/// Builds the `qdbapi` document for one page.
///
/// The page body rides inside a CDATA section so markup-significant
/// characters in the content reach the service byte-for-byte, unescaped.
/// A body containing the CDATA terminator `]]>` ends the section early and
/// corrupts the rest of the document; callers get no escaping for that
/// sequence.
pub fn build_page_payload(
    page_name: &str,
    page_type: PageType,
    body: &str,
    user_token: &str,
    app_token: &str,
) -> String {
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<qdbapi>\n",
            "  <pagename>{page_name}</pagename>\n",
            "  <pagetype>{page_type}</pagetype>\n",
            "  <pagebody><![CDATA[\n",
            "{body}\n",
            "  ]]></pagebody>\n",
            "  <usertoken>{user_token}</usertoken>\n",
            "  <apptoken>{app_token}</apptoken>\n",
            "</qdbapi>\n",
        ),
        page_name = page_name,
        page_type = page_type.tag(),
        body = body,
        user_token = user_token,
        app_token = app_token,
    )
}
