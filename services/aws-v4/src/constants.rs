// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

/// Algorithm identifier of Signature Version 4.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
/// Terminator of every credential scope.
pub const AWS4_REQUEST: &str = "aws4_request";
/// Prefix prepended to the secret access key before the first derivation step.
pub const AWS4_KEY_PREFIX: &str = "AWS4";

// Headers used in aws services.

/// Header carrying the signing timestamp.
pub const X_AMZ_DATE: &str = "x-amz-date";
/// Header carrying the session token of temporary credentials.
pub const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";

// Env values used in aws services.

/// Env value of the access key id.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Env value of the secret access key.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// Env value of the session token.
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
/// Env value of the profile name.
pub const AWS_PROFILE: &str = "AWS_PROFILE";
/// Env value of the shared credentials file path.
pub const AWS_SHARED_CREDENTIALS_FILE: &str = "AWS_SHARED_CREDENTIALS_FILE";
/// Env value of the region.
pub const AWS_REGION: &str = "AWS_REGION";
/// Env value of the fallback region.
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";

/// Default location of the shared credentials file.
pub const DEFAULT_SHARED_CREDENTIALS_FILE: &str = "~/.aws/credentials";
/// Profile used when neither configuration nor environment names one.
pub const DEFAULT_PROFILE: &str = "default";
