// by-request 리포트의 기본 최대 항목 수
pub const DEFAULT_LIMIT: usize = 10;

// 핑거프린트 계산에 사용하는 기본 꼬리 라인 수
pub const DEFAULT_PRECISION: usize = 7;

// by-snapshot 리포트는 limit 옵션과 무관하게 항상 상위 10개 그룹만 출력
pub const TOP_SNAPSHOT_GROUPS: usize = 10;

// SHA-1 hex digest 중 유지하는 앞부분 길이
pub const FINGERPRINT_ID_LEN: usize = 8;

// --start / --end 옵션과 리포트 출력에 쓰이는 날짜 형식
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// 라인 읽기 버퍼 크기
pub const READ_BUFFER_SIZE: usize = 64 * 1024;
