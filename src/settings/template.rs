/// Generate the template written by `detour --init`.
///
/// The template spells out every setting with its built-in default, so a
/// freshly initialized file changes nothing until the user edits it.
pub fn generate_init_template() -> String {
	r##"# detour settings
#
# The nearest .detour.toml (walking up from the working directory, then
# ~/.detour.toml) is used whole. Every key is optional; omitted keys keep
# their built-in defaults. All keyword matching is plain substring matching
# against node names, case-sensitive.

# Nodes whose name contains any of these are removed outright, from the
# proxy list and from every group's member list.
block-keywords = ["专线X5倍率", "到期", "剩余流量", "重置", "官网", "如果是", "套餐"]

# Only nodes whose name contains one of these feed the special/media group.
special-region-keywords = ["新加坡", "日本", "美国", "US", "JP", "SG", "Taiwan", "TW", "HK"]

# Group names as shown in the client UI. The general group is the airport's
# stock auto-select group; it is recognized by this exact name or by the
# auto/urltest/自动 tokens and created if missing.
special-group-name = "🚀 专用/媒体自动"
general-group-name = "自动选择"

# Domain suffixes routed straight to DIRECT, ahead of everything else.
direct-domains = [
    "baidu.com",
    "qq.com",
    "163.com",
    "taobao.com",
    "jd.com",
    "cn",
    "microsoft.com",
    "apple.com",
]

# Domain suffixes pinned to the special/media group.
special-domains = [
    "google.com",
    "gstatic.com",
    "googleapis.com",
    "youtu.be",
    "youtube.com",
    "openai.com",
    "chatgpt.com",
    "auth0.com",
    "oaistatic.com",
    "microsoftedge.com",
    "anthropic.com",
    "claude.ai",
    "netflix.com",
    "nflxvideo.net",
    "disney.com",
    "spotify.com",
    "dmm.co.jp",
    "nicovideo.jp",
    "shopee.sg",
    "lazada.sg",
]
"##
	.to_string()
}
