//! Request construction for the Instagram web GraphQL endpoint.
//!
//! Everything in this module mimics one specific build of the Instagram web
//! client. The endpoint fingerprints callers on the full header/parameter
//! set, so the values are opaque constants to reproduce, not logic; when the
//! upstream build rotates, load a replacement [`RequestFingerprint`] instead
//! of editing the extraction code.

use serde::{Deserialize, Serialize};

/// Endpoint the post query is POSTed to.
pub const GRAPHQL_URL: &str = "https://www.instagram.com/graphql/query";

/// Base of the canonical post permalink.
pub const PERMALINK_BASE: &str = "https://www.instagram.com/p";

/// Canonical permalink for a shortcode. Also the `Referer` value, which
/// must embed the same shortcode as the `variables` payload.
pub fn permalink(shortcode: &str) -> String {
    format!("{}/{}/", PERMALINK_BASE, shortcode)
}

/// The token set of one Instagram web client build.
///
/// Fields named after their wire parameter (serde renames keep the
/// `__`-prefixed names deserializable from a token file). `Default` is a
/// known-good capture; a partial JSON file overrides only the rotated
/// tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestFingerprint {
    /// `User-Agent` header; a Samsung Android browser build.
    pub user_agent: String,
    /// `X-CSRFToken` header.
    pub csrf_token: String,
    /// `X-IG-App-ID` header.
    pub app_id: String,
    /// `X-BLOKS-VERSION-ID` header.
    pub bloks_version_id: String,
    /// `X-ASBD-ID` header.
    pub asbd_id: String,
    /// Body `lsd` parameter and `X-FB-LSD` header; must agree.
    pub lsd: String,
    /// `fb_api_req_friendly_name` parameter and `X-FB-Friendly-Name` header.
    pub friendly_name: String,
    /// Persisted-query id of the post-load GraphQL query.
    pub doc_id: String,
    pub av: String,
    #[serde(rename = "__d")]
    pub d: String,
    #[serde(rename = "__user")]
    pub user: String,
    #[serde(rename = "__a")]
    pub a: String,
    #[serde(rename = "__req")]
    pub req: String,
    #[serde(rename = "__hs")]
    pub hs: String,
    pub dpr: String,
    #[serde(rename = "__ccg")]
    pub ccg: String,
    #[serde(rename = "__rev")]
    pub rev: String,
    #[serde(rename = "__s")]
    pub s: String,
    #[serde(rename = "__hsi")]
    pub hsi: String,
    #[serde(rename = "__dyn")]
    pub dyn_params: String,
    #[serde(rename = "__csr")]
    pub csr: String,
    #[serde(rename = "__comet_req")]
    pub comet_req: String,
    pub jazoest: String,
    #[serde(rename = "__spin_r")]
    pub spin_r: String,
    #[serde(rename = "__spin_b")]
    pub spin_b: String,
    #[serde(rename = "__spin_t")]
    pub spin_t: String,
    #[serde(rename = "__crn")]
    pub crn: String,
    pub fb_api_caller_class: String,
    pub server_timestamps: String,
}

impl Default for RequestFingerprint {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Linux; Android 11; SAMSUNG SM-G973U) AppleWebKit/537.36 (KHTML, like Gecko) SamsungBrowser/14.2 Chrome/87.0.4280.141 Mobile Safari/537.36".into(),
            csrf_token: "uy8OpI1kndx4oUHjlHaUfu".into(),
            app_id: "1217981644879628".into(),
            bloks_version_id: "0d99de0d13662a50e0958bcb112dd651f70dea02e1859073ab25f8f2a477de96".into(),
            asbd_id: "359341".into(),
            lsd: "AVrqPT0gJDo".into(),
            friendly_name: "PolarisPostActionLoadPostQueryQuery".into(),
            doc_id: "8845758582119845".into(),
            av: "0".into(),
            d: "www".into(),
            user: "0".into(),
            a: "1".into(),
            req: "b".into(),
            hs: "20183.HYP:instagram_web_pkg.2.1...0".into(),
            dpr: "3".into(),
            ccg: "GOOD".into(),
            rev: "1021613311".into(),
            s: "hm5eih:ztapmw:x0losd".into(),
            hsi: "7489787314313612244".into(),
            dyn_params: "7xeUjG1mxu1syUbFp41twpUnwgU7SbzEdF8aUco2qwJw5ux609vCwjE1EE2Cw8G11wBz81s8hwGxu786a3a1YwBgao6C0Mo2swtUd8-U2zxe2GewGw9a361qw8Xxm16wa-0oa2-azo7u3C2u2J0bS1LwTwKG1pg2fwxyo6O1FwlA3a3zhA6bwIxe6V8aUuwm8jwhU3cyVrDyo".into(),
            csr: "goMJ6MT9Z48KVkIBBvRfqKOkinBtG-FfLaRgG-lZ9Qji9XGexh7VozjHRKq5J6KVqjQdGl2pAFmvK5GWGXyk8h9GA-m6V5yF4UWagnJzazAbZ5osXuFkVeGCHG8GF4l5yp9oOezpo88PAlZ1Pxa5bxGQ7o9VrFbg-8wwxp1G2acxacGVQ00jyoE0ijonyXwfwEnwWwkA2m0dLw3tE1I80hCg8UeU4Ohox0clAhAtsM0iCA9wap4DwhS1fxW0fLhpRB51m13xC3e0h2t2H801HQw1bu02j-".into(),
            comet_req: "7".into(),
            jazoest: "2946".into(),
            spin_r: "1021613311".into(),
            spin_b: "trunk".into(),
            spin_t: "1743852001".into(),
            crn: "comet.igweb.PolarisPostRoute".into(),
            fb_api_caller_class: "RelayModern".into(),
            server_timestamps: "true".into(),
        }
    }
}

/// Variables payload of the post-load query. Field order is part of the
/// wire shape; only `shortcode` varies per call.
#[derive(Debug, Serialize)]
struct PostQueryVariables<'a> {
    shortcode: &'a str,
    fetch_tagged_user_count: Option<()>,
    hoisted_comment_id: Option<()>,
    hoisted_reply_id: Option<()>,
}

/// Serialized `variables` value embedding the shortcode.
pub fn query_variables(shortcode: &str) -> String {
    serde_json::to_string(&PostQueryVariables {
        shortcode,
        fetch_tagged_user_count: None,
        hoisted_comment_id: None,
        hoisted_reply_id: None,
    })
    .expect("variables payload should serialize")
}

/// Full url-encoded parameter bag, in wire order.
pub fn form_params(fingerprint: &RequestFingerprint, shortcode: &str) -> Vec<(&'static str, String)> {
    let fp = fingerprint;
    vec![
        ("av", fp.av.clone()),
        ("__d", fp.d.clone()),
        ("__user", fp.user.clone()),
        ("__a", fp.a.clone()),
        ("__req", fp.req.clone()),
        ("__hs", fp.hs.clone()),
        ("dpr", fp.dpr.clone()),
        ("__ccg", fp.ccg.clone()),
        ("__rev", fp.rev.clone()),
        ("__s", fp.s.clone()),
        ("__hsi", fp.hsi.clone()),
        ("__dyn", fp.dyn_params.clone()),
        ("__csr", fp.csr.clone()),
        ("__comet_req", fp.comet_req.clone()),
        ("lsd", fp.lsd.clone()),
        ("jazoest", fp.jazoest.clone()),
        ("__spin_r", fp.spin_r.clone()),
        ("__spin_b", fp.spin_b.clone()),
        ("__spin_t", fp.spin_t.clone()),
        ("__crn", fp.crn.clone()),
        ("fb_api_caller_class", fp.fb_api_caller_class.clone()),
        ("fb_api_req_friendly_name", fp.friendly_name.clone()),
        ("variables", query_variables(shortcode)),
        ("server_timestamps", fp.server_timestamps.clone()),
        ("doc_id", fp.doc_id.clone()),
    ]
}

/// Fixed header set, minus the per-request `Referer`.
pub fn header_pairs(fingerprint: &RequestFingerprint) -> Vec<(&'static str, String)> {
    let fp = fingerprint;
    vec![
        ("User-Agent", fp.user_agent.clone()),
        ("Accept", "*/*".into()),
        ("Accept-Language", "en-US,en;q=0.5".into()),
        ("Content-Type", "application/x-www-form-urlencoded".into()),
        ("X-FB-Friendly-Name", fp.friendly_name.clone()),
        ("X-BLOKS-VERSION-ID", fp.bloks_version_id.clone()),
        ("X-CSRFToken", fp.csrf_token.clone()),
        ("X-IG-App-ID", fp.app_id.clone()),
        ("X-FB-LSD", fp.lsd.clone()),
        ("X-ASBD-ID", fp.asbd_id.clone()),
        ("Sec-GPC", "1".into()),
        ("Sec-Fetch-Dest", "empty".into()),
        ("Sec-Fetch-Mode", "cors".into()),
        ("Sec-Fetch-Site", "same-origin".into()),
        ("Pragma", "no-cache".into()),
        ("Cache-Control", "no-cache".into()),
    ]
}
