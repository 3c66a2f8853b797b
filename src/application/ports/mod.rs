mod file_parser;
mod markdown_converter;
mod provider_adapter;
mod relay_client;
mod upstream_transport;

pub use file_parser::{FileParser, FileParserError};
pub use markdown_converter::MarkdownConverter;
pub use provider_adapter::{
    OutboundRequest, ProviderAdapter, ProviderError, UpstreamPrompt, UserPart,
};
pub use relay_client::{RelayClient, RelayClientError};
pub use upstream_transport::{TransportError, UpstreamResponse, UpstreamTransport};
