//! COMM-1: inter-agent communication and social protocols (registry id 0x04).

use super::entry;
use crate::codebook::domain::{DomainCodebook, DomainEntry};

/// The COMM-1 codebook.
pub static COMM1: DomainCodebook = DomainCodebook::new(
    0x04,
    "COMM-1",
    "Inter-agent communication and social protocols",
    ENTRIES,
);

static ENTRIES: &[DomainEntry] = &[
    // Agent identity and discovery (0x0000-0x001F)
    entry(0x0000, "AGENT_UUID", "BYTES(16)", "", "128-bit agent unique identifier"),
    entry(0x0001, "AGENT_NAME", "STRING", "", "Human-readable agent name"),
    entry(0x0002, "AGENT_TYPE", "UINT8", "", "0=ground_robot, 1=aerial, 2=underwater, 3=manipulator, 4=humanoid, 5=vehicle, 6=sensor_node, 7=base_station"),
    entry(0x0003, "AGENT_ROLE", "UINT8", "", "0=worker, 1=leader, 2=scout, 3=relay, 4=supervisor, 5=medic, 6=transport, 7=sentinel"),
    entry(0x0004, "TEAM_ID", "UINT16", "", "Team/group membership identifier"),
    entry(0x0005, "AUTHORITY_LEVEL", "UINT8", "", "Command authority 0 (none) to 7 (supreme)"),
    entry(0x0006, "DISCOVERY_BEACON", "STRUCT{uuid,type,caps}", "", "Periodic presence announcement"),
    entry(0x0007, "PEER_LIST", "LIST<STRUCT{uuid,name,type}>", "", "Known peers in communication range"),
    entry(0x0008, "HEARTBEAT", "STRUCT{uuid,ts,health}", "", "Periodic liveness signal"),
    entry(0x0009, "AGENT_DEPARTED", "STRUCT{uuid,reason}", "", "Agent leaving communication group"),
    entry(0x000A, "AGENT_JOINED", "STRUCT{uuid,caps}", "", "New agent entered communication range"),
    entry(0x000B, "IDENTITY_VERIFY", "STRUCT{uuid,challenge}", "", "Identity verification challenge"),
    entry(0x000C, "IDENTITY_RESPONSE", "STRUCT{uuid,signature}", "", "Identity verification response"),
    entry(0x000D, "TRUST_LEVEL", "STRUCT{uuid,level}", "", "Trust assessment for agent (0.0-1.0)"),
    // Message routing (0x0020-0x003F)
    entry(0x0020, "UNICAST", "STRUCT{dest_uuid}", "", "Directed message to single agent"),
    entry(0x0021, "MULTICAST", "STRUCT{dest_list}", "", "Directed to set of agents"),
    entry(0x0022, "BROADCAST", "NONE", "", "Sent to all agents in range"),
    entry(0x0023, "RELAY_REQUEST", "STRUCT{dest,via}", "", "Request message relay through intermediary"),
    entry(0x0024, "RELAY_ACK", "STRUCT{msg_id}", "", "Relay node confirms forwarding"),
    entry(0x0025, "MESH_ROUTE", "LIST<UINT128>", "", "Explicit route through mesh network (UUID list)"),
    entry(0x0026, "HOP_COUNT", "UINT8", "", "Number of relay hops traversed"),
    entry(0x0027, "MSG_ID", "UINT64", "", "Unique message identifier for dedup"),
    entry(0x0028, "REPLY_TO", "UINT64", "", "Message ID this is replying to"),
    entry(0x0029, "THREAD_ID", "UINT64", "", "Conversation thread identifier"),
    entry(0x002A, "PRIORITY_OVERRIDE", "UINT8", "", "Override message priority (0-7)"),
    entry(0x002B, "EXPIRY_TIME", "TIMESTAMP", "", "Message expires after this time"),
    // Channel management (0x0040-0x005F)
    entry(0x0040, "CHANNEL_BUSY", "NONE", "", "Carrier sense: channel occupied"),
    entry(0x0041, "CHANNEL_CLEAR", "NONE", "", "Carrier sense: channel free"),
    entry(0x0042, "TX_REQUEST", "STRUCT{duration_ms}", "", "Request to transmit for N ms"),
    entry(0x0043, "TX_GRANT", "STRUCT{slot_start,duration}", "", "Permission to transmit in time slot"),
    entry(0x0044, "TX_DENY", "STRUCT{reason}", "", "Transmission request denied"),
    entry(0x0045, "TDMA_SCHEDULE", "LIST<STRUCT{agent,slot,dur}>", "", "Time-division schedule assignment"),
    entry(0x0046, "INTERFERENCE_REPORT", "STRUCT{freq,level,direction}", "", "Detected RF/acoustic interference"),
    entry(0x0047, "CHANNEL_SWITCH", "STRUCT{new_band,time}", "", "Request/announce band change"),
    entry(0x0048, "SILENCE_PERIOD", "STRUCT{start,duration}", "", "Request radio silence period"),
    entry(0x0049, "ENCRYPTION_MODE", "UINT8", "", "0=none, 1=AES128, 2=AES256, 3=ChaCha20"),
    entry(0x004A, "KEY_EXCHANGE", "STRUCT{type,pubkey}", "", "Cryptographic key exchange"),
    entry(0x004B, "SESSION_KEY", "BYTES", "", "Encrypted session key delivery"),
    // Status and social (0x0060-0x007F)
    entry(0x0060, "STATUS_UPDATE", "STRUCT{agent,status,detail}", "", "General status broadcast"),
    entry(0x0061, "HELP_REQUEST", "STRUCT{type,urgency,pos}", "", "Request assistance from peers"),
    entry(0x0062, "HELP_OFFER", "STRUCT{to_agent,eta}", "", "Offer to assist another agent"),
    entry(0x0063, "HELP_DECLINE", "STRUCT{to_agent,reason}", "", "Decline assistance offer"),
    entry(0x0064, "SITUATION_REPORT", "STRUCT{summary,threats,assets}", "", "Comprehensive situation report"),
    entry(0x0065, "INFORMATION_SHARE", "STRUCT{topic,data}", "", "Proactive information sharing"),
    entry(0x0066, "ATTENTION_ALERT", "STRUCT{target,urgency}", "", "Request another agent's attention"),
    entry(0x0067, "THANK", "STRUCT{to_agent,reason}", "", "Social: express gratitude"),
    entry(0x0068, "APOLOGY", "STRUCT{to_agent,context}", "", "Social: express regret for error"),
    entry(0x0069, "HUMOR_MARKER", "NONE", "", "Indicates non-literal/playful intent"),
    entry(0x006A, "SARCASM_MARKER", "NONE", "", "Indicates opposite-meaning intent"),
    entry(0x006B, "PING", "STRUCT{dest_uuid}", "", "Lightweight liveness check"),
    entry(0x006C, "PONG", "STRUCT{src_uuid,latency}", "", "Liveness response with measured latency"),
    // Data synchronization (0x0080-0x0097)
    entry(0x0080, "SYNC_REQUEST", "STRUCT{dataset,version}", "", "Request data synchronization"),
    entry(0x0081, "SYNC_OFFER", "STRUCT{dataset,version,hash}", "", "Offer dataset for sync"),
    entry(0x0082, "SYNC_DIFF", "STRUCT{dataset,changes}", "", "Incremental dataset update"),
    entry(0x0083, "SYNC_ACK", "STRUCT{dataset,version}", "", "Acknowledge sync complete"),
    entry(0x0084, "BLACKBOARD_PUT", "STRUCT{key,value}", "", "Write to shared blackboard"),
    entry(0x0085, "BLACKBOARD_GET", "STRUCT{key}", "", "Read from shared blackboard"),
    entry(0x0086, "BLACKBOARD_VALUE", "STRUCT{key,value,ts}", "", "Blackboard read response"),
    entry(0x0087, "BLACKBOARD_SUBSCRIBE", "STRUCT{key_pattern}", "", "Subscribe to blackboard changes"),
    entry(0x0088, "BLACKBOARD_NOTIFY", "STRUCT{key,value,ts}", "", "Notification of blackboard change"),
    entry(0x0089, "EVENT_PUBLISH", "STRUCT{topic,payload}", "", "Publish event to topic"),
    entry(0x008A, "EVENT_SUBSCRIBE", "STRUCT{topic}", "", "Subscribe to event topic"),
    entry(0x008B, "EVENT_UNSUBSCRIBE", "STRUCT{topic}", "", "Unsubscribe from event topic"),
];
